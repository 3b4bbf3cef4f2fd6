use crate::hangul::*;

/// начало блока совместимых чамо (ㄱ, U+3131)
pub const HCJ_BASE: u32 = 0x3131;
/// последнее современное совместимое чамо (ㅣ, U+3163)
pub const HCJ_LAST: u32 = 0x3163;
/// начало гласных совместимых чамо (ㅏ, U+314F), порядок гласных совпадает с позиционными
pub const HCJ_VOWEL_BASE: u32 = 0x314F;

/// количество современных совместимых чамо
const HCJ_BLOCK_LEN: usize = (HCJ_LAST - HCJ_BASE + 1) as usize;
/// отсутствие индекса в таблицах обратного поиска
const NO_INDEX: u8 = u8::MAX;

/// ведущие согласные, совместимые чамо (в порядке индексов Unicode)
#[rustfmt::skip]
pub const HCJ_LEADS: [char; LEAD_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// гласные, совместимые чамо
#[rustfmt::skip]
pub const HCJ_VOWELS: [char; VOWEL_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// завершающие согласные, совместимые чамо. индекс 0 - отсутствие завершающей согласной
#[rustfmt::skip]
pub const HCJ_TAILS: [Option<char>; TAIL_COUNT as usize] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// ведущие согласные, позиционные чамо (U+1100..=U+1112)
pub const JAMO_LEADS: [char; LEAD_COUNT as usize] = positional_run(JAMO_LEAD_BASE);

/// гласные, позиционные чамо (U+1161..=U+1175)
pub const JAMO_VOWELS: [char; VOWEL_COUNT as usize] = positional_run(JAMO_VOWEL_BASE);

/// завершающие согласные, позиционные чамо (U+11A8..=U+11C2). индекс 0 - отсутствие завершающей согласной
pub const JAMO_TAILS: [Option<char>; TAIL_COUNT as usize] = positional_tails();

/// составные чамо: сдвоенные согласные, сочетания согласных, дифтонги.
/// порядок компонентов - порядок написания
#[rustfmt::skip]
pub const JAMO_COMPOUNDS: [(char, (char, char)); 23] = [
    ('ㄲ', ('ㄱ', 'ㄱ')),
    ('ㄳ', ('ㄱ', 'ㅅ')),
    ('ㄵ', ('ㄴ', 'ㅈ')),
    ('ㄶ', ('ㄴ', 'ㅎ')),
    ('ㄸ', ('ㄷ', 'ㄷ')),
    ('ㄺ', ('ㄹ', 'ㄱ')),
    ('ㄻ', ('ㄹ', 'ㅁ')),
    ('ㄼ', ('ㄹ', 'ㅂ')),
    ('ㄽ', ('ㄹ', 'ㅅ')),
    ('ㄾ', ('ㄹ', 'ㅌ')),
    ('ㄿ', ('ㄹ', 'ㅍ')),
    ('ㅀ', ('ㄹ', 'ㅎ')),
    ('ㅃ', ('ㅂ', 'ㅂ')),
    ('ㅄ', ('ㅂ', 'ㅅ')),
    ('ㅆ', ('ㅅ', 'ㅅ')),
    ('ㅉ', ('ㅈ', 'ㅈ')),
    ('ㅘ', ('ㅗ', 'ㅏ')),
    ('ㅙ', ('ㅗ', 'ㅐ')),
    ('ㅚ', ('ㅗ', 'ㅣ')),
    ('ㅝ', ('ㅜ', 'ㅓ')),
    ('ㅞ', ('ㅜ', 'ㅔ')),
    ('ㅟ', ('ㅜ', 'ㅣ')),
    ('ㅢ', ('ㅡ', 'ㅣ')),
];

// таблицы обратного поиска по блоку совместимых чамо: отступ от U+3131 -> индекс

/// совместимое чамо -> индекс ведущей согласной
static HCJ_LEAD_INDEX: [u8; HCJ_BLOCK_LEN] = build_lead_index();
/// совместимое чамо -> индекс завершающей согласной (0 - не является завершающей согласной)
static HCJ_TAIL_INDEX: [u8; HCJ_BLOCK_LEN] = build_tail_index();
/// совместимое чамо -> индекс в таблице составных чамо
static HCJ_COMPOUND_INDEX: [u8; HCJ_BLOCK_LEN] = build_compound_index();

/// отступ от начала блока совместимых чамо, если символ - современное совместимое чамо
#[inline(always)]
const fn hcj_offset(c: char) -> Option<usize>
{
    let offset = (c as u32).wrapping_sub(HCJ_BASE);

    match offset < HCJ_BLOCK_LEN as u32 {
        true => Some(offset as usize),
        false => None,
    }
}

/// символ - современное совместимое чамо?
#[inline(always)]
pub const fn is_hcj(c: char) -> bool
{
    hcj_offset(c).is_some()
}

/// индекс ведущей согласной для совместимого чамо
#[inline(always)]
pub fn hcj_lead_index(c: char) -> Option<u32>
{
    let index = HCJ_LEAD_INDEX[hcj_offset(c)?];

    match index {
        NO_INDEX => None,
        _ => Some(index as u32),
    }
}

/// индекс гласной для совместимого чамо
#[inline(always)]
pub const fn hcj_vowel_index(c: char) -> Option<u32>
{
    let v = (c as u32).wrapping_sub(HCJ_VOWEL_BASE);

    match v < VOWEL_COUNT {
        true => Some(v),
        false => None,
    }
}

/// индекс (1..=27) завершающей согласной для совместимого чамо
#[inline(always)]
pub fn hcj_tail_index(c: char) -> Option<u32>
{
    match HCJ_TAIL_INDEX[hcj_offset(c)?] {
        0 => None,
        index => Some(index as u32),
    }
}

/// запись таблицы составных чамо
#[inline(always)]
pub fn compound_entry(c: char) -> Option<&'static (char, (char, char))>
{
    match HCJ_COMPOUND_INDEX[hcj_offset(c)?] {
        NO_INDEX => None,
        index => Some(&JAMO_COMPOUNDS[index as usize]),
    }
}

/// последовательность позиционных чамо от base
const fn positional_run<const N: usize>(base: u32) -> [char; N]
{
    let mut result = ['\0'; N];
    let mut i = 0;

    while i < N {
        result[i] = positional_char(base + i as u32);
        i += 1;
    }

    result
}

/// позиционные завершающие согласные, начиная с индекса 1
const fn positional_tails() -> [Option<char>; TAIL_COUNT as usize]
{
    let mut result = [None; TAIL_COUNT as usize];
    let mut i = 1;

    while i < TAIL_COUNT as usize {
        result[i] = Some(positional_char(JAMO_TAIL_BASE + i as u32));
        i += 1;
    }

    result
}

const fn positional_char(code: u32) -> char
{
    match char::from_u32(code) {
        Some(c) => c,
        None => panic!("некорректный кодпоинт чамо"),
    }
}

const fn build_lead_index() -> [u8; HCJ_BLOCK_LEN]
{
    let mut result = [NO_INDEX; HCJ_BLOCK_LEN];
    let mut i = 0;

    while i < HCJ_LEADS.len() {
        result[(HCJ_LEADS[i] as u32 - HCJ_BASE) as usize] = i as u8;
        i += 1;
    }

    result
}

const fn build_tail_index() -> [u8; HCJ_BLOCK_LEN]
{
    let mut result = [0; HCJ_BLOCK_LEN];
    let mut i = 1;

    while i < HCJ_TAILS.len() {
        if let Some(c) = HCJ_TAILS[i] {
            result[(c as u32 - HCJ_BASE) as usize] = i as u8;
        }
        i += 1;
    }

    result
}

const fn build_compound_index() -> [u8; HCJ_BLOCK_LEN]
{
    let mut result = [NO_INDEX; HCJ_BLOCK_LEN];
    let mut i = 0;

    while i < JAMO_COMPOUNDS.len() {
        result[(JAMO_COMPOUNDS[i].0 as u32 - HCJ_BASE) as usize] = i as u8;
        i += 1;
    }

    result
}
