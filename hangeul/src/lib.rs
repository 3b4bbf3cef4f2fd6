//! декомпозиция слогов хангыль на чамо и обратная сборка
//!
//! поддерживаются 2 представления чамо: совместимые (U+3131..=U+3163) и позиционные
//! (U+1100..=U+11C2). символы, не относящиеся к хангыль, переносятся в результат без изменений.
//!
//! ```
//! assert_eq!(hangeul_jamo::decompose_hcj("한글"), "ㅎㅏㄴㄱㅡㄹ");
//! assert_eq!(hangeul_jamo::compose_hcj("ㅎㅏㄴㄱㅡㄹ"), "한글");
//! ```

pub use composition::compose;
pub use composition::Composer;
pub use composition::State;
pub use compound::compose_compound;
pub use compound::compose_compound_slice;
pub use compound::decompose_compound;
pub use conversion::hcj_to_jamo;
pub use conversion::hcj_to_jamo_str;
pub use conversion::jamo_to_hcj;
pub use decomposition::decompose;
pub use decomposition::decompose_chars;
pub use decomposition::decompositions;
pub use decomposition::Decompositions;
pub use error::JamoError;
pub use hangul::*;
pub use jamo::Jamo;
pub use jamo::Representation;
pub use jamo::Role;
pub use properties::*;
pub use tables::is_hcj;
pub use tables::HCJ_BASE;
pub use tables::HCJ_LAST;
pub use tables::HCJ_LEADS;
pub use tables::HCJ_TAILS;
pub use tables::HCJ_VOWELS;
pub use tables::HCJ_VOWEL_BASE;
pub use tables::JAMO_COMPOUNDS;
pub use tables::JAMO_LEADS;
pub use tables::JAMO_TAILS;
pub use tables::JAMO_VOWELS;

mod composition;
mod compound;
mod conversion;
mod decomposition;
mod error;
mod hangul;
mod jamo;
mod properties;
mod tables;

/// разложить слоги хангыль на совместимые чамо
#[inline]
pub fn decompose_hcj(input: &str) -> String
{
    decompose(input, Representation::Hcj)
}

/// разложить слоги хангыль на позиционные чамо
#[inline]
pub fn decompose_jamo(input: &str) -> String
{
    decompose(input, Representation::Jamo)
}

/// собрать слоги хангыль из совместимых чамо
#[inline]
pub fn compose_hcj(input: &str) -> String
{
    compose(input, Representation::Hcj)
}

/// собрать слоги хангыль из позиционных чамо
#[inline]
pub fn compose_jamo(input: &str) -> String
{
    compose(input, Representation::Jamo)
}
