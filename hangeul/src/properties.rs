use crate::hangul::*;
use crate::jamo::Role;
use crate::tables::*;

// свойства символов. все проверки принимают любой символ и никогда не завершаются ошибкой

/// символ - современное позиционное чамо (ведущая согласная, гласная или завершающая согласная)?
#[inline(always)]
pub const fn is_jamo(c: char) -> bool
{
    positional_indices(c).is_some()
}

/// ведущая согласная в любом из представлений?
#[inline(always)]
pub fn is_jamo_lead(c: char) -> bool
{
    is_positional_role(c, Role::Lead) || hcj_lead_index(c).is_some()
}

/// гласная в любом из представлений?
#[inline(always)]
pub fn is_jamo_vowel(c: char) -> bool
{
    is_positional_role(c, Role::Vowel) || hcj_vowel_index(c).is_some()
}

/// завершающая согласная в любом из представлений?
#[inline(always)]
pub fn is_jamo_tail(c: char) -> bool
{
    is_positional_role(c, Role::Tail) || hcj_tail_index(c).is_some()
}

/// составное чамо (сдвоенная согласная, сочетание согласных, дифтонг)?
#[inline(always)]
pub fn is_jamo_compound(c: char) -> bool
{
    compound_entry(c).is_some()
}

#[inline(always)]
fn is_positional_role(c: char, role: Role) -> bool
{
    matches!(positional_indices(c), Some((r, _)) if r == role)
}
