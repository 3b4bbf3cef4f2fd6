use core::iter::FusedIterator;
use core::str::Chars;

use crate::hangul::syllable_indices;
use crate::jamo::Representation;
use crate::tables::*;

/// разложить слоги хангыль на чамо, всё остальное переносится в результат без изменений
///
/// слог без завершающей согласной даёт 2 чамо, с завершающей согласной - 3
#[inline(never)]
pub fn decompose(input: &str, representation: Representation) -> String
{
    // слог (3 байта UTF-8) раскладывается максимум на 3 чамо по 3 байта
    let mut result = String::with_capacity(input.len() * 3);
    let mut breakpoint = 0;

    for (position, c) in input.char_indices() {
        let Some((l, v, t)) = syllable_indices(c) else {
            continue;
        };

        // отрезок без слогов хангыль пишем как есть
        result.push_str(&input[breakpoint .. position]);
        write_jamo(&mut result, l, v, t, representation);

        breakpoint = position + c.len_utf8();
    }

    result.push_str(&input[breakpoint ..]);
    result
}

/// ленивая декомпозиция последовательности символов
pub fn decompositions<I>(iter: I, representation: Representation) -> Decompositions<I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    Decompositions::new(iter.into_iter(), representation)
}

/// ленивая декомпозиция строки
pub fn decompose_chars(input: &str, representation: Representation) -> Decompositions<Chars<'_>>
{
    Decompositions::new(input.chars(), representation)
}

/// дописать чамо слога в результат
#[inline(always)]
fn write_jamo(result: &mut String, l: u32, v: u32, t: u32, representation: Representation)
{
    let (lead, vowel, tail) = jamo_chars(l, v, t, representation);

    result.push(lead);
    result.push(vowel);

    if let Some(tail) = tail {
        result.push(tail);
    }
}

/// символы чамо по индексам слога
#[inline(always)]
fn jamo_chars(l: u32, v: u32, t: u32, representation: Representation) -> (char, char, Option<char>)
{
    let (l, v, t) = (l as usize, v as usize, t as usize);

    match representation {
        Representation::Hcj => (HCJ_LEADS[l], HCJ_VOWELS[v], HCJ_TAILS[t]),
        Representation::Jamo => (JAMO_LEADS[l], JAMO_VOWELS[v], JAMO_TAILS[t]),
    }
}

/// итератор декомпозиции: слоги хангыль раскладываются на чамо по мере чтения
#[derive(Clone, Debug)]
pub struct Decompositions<I>
{
    iter: I,
    representation: Representation,
    /// оставшиеся чамо текущего слога (гласная, завершающая согласная)
    buffer: [char; 2],
    /// позиция в буфере
    position: u8,
    /// количество чамо в буфере
    len: u8,
}

impl<I: Iterator<Item = char>> Decompositions<I>
{
    pub fn new(iter: I, representation: Representation) -> Self
    {
        Self {
            iter,
            representation,
            buffer: ['\0'; 2],
            position: 0,
            len: 0,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Decompositions<I>
{
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char>
    {
        if self.position < self.len {
            let c = self.buffer[self.position as usize];
            self.position += 1;

            return Some(c);
        }

        let c = self.iter.next()?;

        let Some((l, v, t)) = syllable_indices(c) else {
            return Some(c);
        };

        let (lead, vowel, tail) = jamo_chars(l, v, t, self.representation);

        self.buffer[0] = vowel;
        self.position = 0;
        self.len = match tail {
            Some(tail) => {
                self.buffer[1] = tail;
                2
            }
            None => 1,
        };

        Some(lead)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let pending = (self.len - self.position) as usize;
        let (lower, upper) = self.iter.size_hint();

        (
            lower.saturating_add(pending),
            upper.and_then(|upper| upper.checked_mul(3)?.checked_add(pending)),
        )
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for Decompositions<I> {}
