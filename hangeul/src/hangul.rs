use crate::error::JamoError;
use crate::jamo::Role;

// слог хангыль - это L * 588 + V * 28 + T, отсчитанные от начала блока слогов U+AC00:
//  - U+1100..=U+1112 (L, ведущие согласные)
//  - U+1161..=U+1175 (V, гласные)
//  - U+11A8..=U+11C2 (T, завершающие согласные, T = 0 - отсутствие завершающей согласной)

/// начало блока слогов хангыль
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
pub const SYLLABLE_COUNT: u32 = 11172;
/// последний слог хангыль (U+D7A3)
pub const SYLLABLE_LAST: u32 = SYLLABLE_BASE + SYLLABLE_COUNT - 1;

/// количество ведущих согласных
pub const LEAD_COUNT: u32 = 19;
/// количество гласных
pub const VOWEL_COUNT: u32 = 21;
/// количество завершающих согласных (на 1 больше, включая отсутствие завершающей согласной)
pub const TAIL_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const N_COUNT: u32 = VOWEL_COUNT * TAIL_COUNT;

/// начало блока ведущих согласных чамо
pub const JAMO_LEAD_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const JAMO_VOWEL_BASE: u32 = 0x1161;
/// начало блока завершающих согласных (на 1 меньше, т.к. T = 0 не имеет символа)
pub const JAMO_TAIL_BASE: u32 = 0x11A7;

/// символ - слог хангыль?
#[inline(always)]
pub const fn is_hangul_syllable(c: char) -> bool
{
    (c as u32).wrapping_sub(SYLLABLE_BASE) < SYLLABLE_COUNT
}

/// индексы (L, V, T) слога хангыль или None, если символ не является слогом
#[inline(always)]
pub(crate) fn syllable_indices(c: char) -> Option<(u32, u32, u32)>
{
    let lvt = (c as u32).wrapping_sub(SYLLABLE_BASE);

    match lvt < SYLLABLE_COUNT {
        true => Some((lvt / N_COUNT, (lvt / TAIL_COUNT) % VOWEL_COUNT, lvt % TAIL_COUNT)),
        false => None,
    }
}

/// слог из заведомо корректных индексов
#[inline(always)]
pub(crate) fn syllable_unchecked(l: u32, v: u32, t: u32) -> char
{
    debug_assert!(l < LEAD_COUNT && v < VOWEL_COUNT && t < TAIL_COUNT);

    // результат всегда в пределах U+AC00..=U+D7A3
    unsafe { char::from_u32_unchecked(SYLLABLE_BASE + (l * VOWEL_COUNT + v) * TAIL_COUNT + t) }
}

/// разложить слог хангыль на индексы (ведущая согласная, гласная, завершающая согласная)
///
/// индекс завершающей согласной 0 означает её отсутствие
pub fn decompose_syllable(syllable: char) -> Result<(u32, u32, u32), JamoError>
{
    syllable_indices(syllable).ok_or(JamoError::NotHangulSyllable(syllable))
}

/// собрать слог хангыль из индексов
pub fn compose_syllable(lead: u32, vowel: u32, tail: u32) -> Result<char, JamoError>
{
    for (role, index) in [(Role::Lead, lead), (Role::Vowel, vowel), (Role::Tail, tail)] {
        if index >= role.count() {
            return Err(JamoError::InvalidIndex { role, index });
        }
    }

    Ok(syllable_unchecked(lead, vowel, tail))
}

/// позиция и индекс современного позиционного чамо (U+1100..=U+11C2)
#[inline(always)]
pub(crate) const fn positional_indices(c: char) -> Option<(Role, u32)>
{
    let code = c as u32;

    let l = code.wrapping_sub(JAMO_LEAD_BASE);
    if l < LEAD_COUNT {
        return Some((Role::Lead, l));
    }

    let v = code.wrapping_sub(JAMO_VOWEL_BASE);
    if v < VOWEL_COUNT {
        return Some((Role::Vowel, v));
    }

    let t = code.wrapping_sub(JAMO_TAIL_BASE);
    if t != 0 && t < TAIL_COUNT {
        return Some((Role::Tail, t));
    }

    None
}
