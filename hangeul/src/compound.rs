use crate::error::JamoError;
use crate::tables::compound_entry;
use crate::tables::JAMO_COMPOUNDS;

/// разложить составное чамо на 2 простых в порядке написания: ㄺ -> (ㄹ, ㄱ), ㅘ -> (ㅗ, ㅏ)
pub fn decompose_compound(compound: char) -> Result<(char, char), JamoError>
{
    compound_entry(compound)
        .map(|(_, pair)| *pair)
        .ok_or(JamoError::InvalidJamo(compound))
}

/// собрать составное чамо из пары простых. порядок важен: (ㄱ, ㅅ) -> ㄳ, но (ㅅ, ㄱ) - ошибка
pub fn compose_compound(pair: (char, char)) -> Result<char, JamoError>
{
    JAMO_COMPOUNDS
        .iter()
        .find(|(_, components)| *components == pair)
        .map(|(compound, _)| *compound)
        .ok_or(JamoError::InvalidPair(pair.0, pair.1))
}

/// то же, что и [`compose_compound`], для последовательности произвольной длины
pub fn compose_compound_slice(components: &[char]) -> Result<char, JamoError>
{
    match *components {
        [first, second] => compose_compound((first, second)),
        _ => Err(JamoError::InvalidArity(components.len())),
    }
}
