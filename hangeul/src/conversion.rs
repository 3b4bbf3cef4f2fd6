use crate::error::JamoError;
use crate::jamo::Jamo;
use crate::jamo::Role;

/// позиционное чамо -> совместимое чамо. всё остальное возвращается без изменений
#[inline(always)]
pub fn jamo_to_hcj(c: char) -> char
{
    match Jamo::from_positional(c) {
        Some(jamo) => jamo.hcj(),
        None => c,
    }
}

/// совместимое чамо -> позиционное чамо для заданной позиции
///
/// позицию необходимо указать явно: одна и та же совместимая согласная
/// может быть как ведущей, так и завершающей
pub fn hcj_to_jamo(c: char, role: Role) -> Result<char, JamoError>
{
    Jamo::from_hcj(c, role)
        .map(|jamo| jamo.positional())
        .ok_or(JamoError::InvalidJamo(c))
}

/// то же, что и [`hcj_to_jamo`], позиция задаётся строкой: "lead", "vowel" или "tail"
pub fn hcj_to_jamo_str(c: char, role: &str) -> Result<char, JamoError>
{
    hcj_to_jamo(c, role.parse()?)
}
