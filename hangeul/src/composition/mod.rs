use crate::jamo::Representation;

pub use composer::Composer;
pub use composer::State;
mod composer;

/// собрать слоги хангыль из чамо, всё остальное переносится в результат без изменений
///
/// незавершённые последовательности (согласная без гласной, гласная без согласной)
/// остаются как есть
#[inline(never)]
pub fn compose(input: &str, representation: Representation) -> String
{
    // слог никогда не длиннее последовательности чамо, из которой он собран
    let mut result = String::with_capacity(input.len());
    let mut composer = Composer::new(representation);
    let mut iter = input.chars().peekable();

    while let Some(c) = iter.next() {
        composer.push(c, iter.peek().copied(), &mut result);
    }

    composer.finish(&mut result);
    result
}
