use crate::hangul::syllable_unchecked;
use crate::jamo::Jamo;
use crate::jamo::Representation;
use crate::jamo::Role;

/// незавершённый слог
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State
{
    /// незавершённого слога нет
    Empty,
    /// получена ведущая согласная, гласной ещё нет
    Lead(Jamo),
    /// получены ведущая согласная и гласная - слог может быть закрыт в любой момент
    LeadVowel(Jamo, Jamo),
}

/// сборка слогов хангыль из потока символов
///
/// каждый символ передаётся вместе со следующим за ним (если он есть). согласная после
/// гласной становится завершающей, только если за ней не следует гласная - иначе она
/// начинает следующий слог: ㄱㅏㄴㅏ -> 가나, но ㄱㅏㄴㄱㅏ -> 간가
#[derive(Clone, Debug)]
pub struct Composer
{
    representation: Representation,
    state: State,
}

impl Composer
{
    pub fn new(representation: Representation) -> Self
    {
        Self {
            representation,
            state: State::Empty,
        }
    }

    #[inline(always)]
    pub fn state(&self) -> State
    {
        self.state
    }

    #[inline(always)]
    pub fn representation(&self) -> Representation
    {
        self.representation
    }

    /// обработать символ c, next - следующий за ним символ
    #[inline]
    pub fn push(&mut self, c: char, next: Option<char>, result: &mut String)
    {
        match self.state {
            State::Empty => match self.parse(c, Role::Lead) {
                Some(lead) => self.state = State::Lead(lead),
                None => result.push(c),
            },
            State::Lead(lead) => match self.parse(c, Role::Vowel) {
                Some(vowel) => self.state = State::LeadVowel(lead, vowel),
                None => {
                    // одиночная согласная слога не образует
                    result.push(lead.to_char(self.representation));
                    self.state = State::Empty;
                    self.push(c, next, result);
                }
            },
            State::LeadVowel(lead, vowel) => {
                if let Some(tail) = self.parse(c, Role::Tail) {
                    if !self.is_vowel(next) {
                        result.push(syllable_unchecked(lead.index(), vowel.index(), tail.index()));
                        self.state = State::Empty;
                        return;
                    }
                }

                // c - ведущая согласная следующего слога или не относится к слогу вовсе
                result.push(syllable_unchecked(lead.index(), vowel.index(), 0));
                self.state = State::Empty;
                self.push(c, next, result);
            }
        }
    }

    /// входные данные закончились - дописать незавершённый слог
    #[inline]
    pub fn finish(&mut self, result: &mut String)
    {
        match self.state {
            State::Empty => (),
            State::Lead(lead) => result.push(lead.to_char(self.representation)),
            State::LeadVowel(lead, vowel) => {
                result.push(syllable_unchecked(lead.index(), vowel.index(), 0))
            }
        }

        self.state = State::Empty;
    }

    #[inline(always)]
    fn parse(&self, c: char, role: Role) -> Option<Jamo>
    {
        Jamo::parse(c, role, self.representation)
    }

    #[inline(always)]
    fn is_vowel(&self, c: Option<char>) -> bool
    {
        c.is_some_and(|c| self.parse(c, Role::Vowel).is_some())
    }
}
