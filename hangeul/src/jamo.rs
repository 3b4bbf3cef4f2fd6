use core::fmt;
use core::str::FromStr;

use crate::error::JamoError;
use crate::hangul::*;
use crate::tables::*;

/// позиция чамо в слоге
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role
{
    /// ведущая согласная
    Lead,
    /// гласная
    Vowel,
    /// завершающая согласная
    Tail,
}

impl Role
{
    /// количество индексов в позиции (для завершающей согласной - включая её отсутствие)
    #[inline(always)]
    pub const fn count(self) -> u32
    {
        match self {
            Self::Lead => LEAD_COUNT,
            Self::Vowel => VOWEL_COUNT,
            Self::Tail => TAIL_COUNT,
        }
    }

    pub const fn as_str(self) -> &'static str
    {
        match self {
            Self::Lead => "lead",
            Self::Vowel => "vowel",
            Self::Tail => "tail",
        }
    }
}

impl fmt::Display for Role
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role
{
    type Err = JamoError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s {
            "lead" => Ok(Self::Lead),
            "vowel" => Ok(Self::Vowel),
            "tail" => Ok(Self::Tail),
            _ => Err(JamoError::InvalidRole(s.to_owned())),
        }
    }
}

/// набор символов, которыми представлены чамо
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Representation
{
    /// совместимые чамо (U+3131..=U+3163), одна согласная может быть и ведущей, и завершающей
    #[default]
    Hcj,
    /// позиционные чамо (U+1100..=U+11C2), позиция определяется диапазоном
    Jamo,
}

/// чамо с известной позицией: позиция + индекс в таблице этой позиции
///
/// индекс завершающей согласной отсчитывается от 1, 0 (отсутствие) не имеет символа
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Jamo
{
    role: Role,
    index: u8,
}

impl Jamo
{
    /// чамо по позиции и индексу
    pub fn new(role: Role, index: u32) -> Result<Self, JamoError>
    {
        let first = match role {
            Role::Tail => 1,
            _ => 0,
        };

        match (first .. role.count()).contains(&index) {
            true => Ok(Self {
                role,
                index: index as u8,
            }),
            false => Err(JamoError::InvalidIndex { role, index }),
        }
    }

    /// позиционное чамо - позиция определяется самим символом
    #[inline(always)]
    pub const fn from_positional(c: char) -> Option<Self>
    {
        match positional_indices(c) {
            Some((role, index)) => Some(Self {
                role,
                index: index as u8,
            }),
            None => None,
        }
    }

    /// совместимое чамо в заданной позиции
    #[inline(always)]
    pub fn from_hcj(c: char, role: Role) -> Option<Self>
    {
        let index = match role {
            Role::Lead => hcj_lead_index(c),
            Role::Vowel => hcj_vowel_index(c),
            Role::Tail => hcj_tail_index(c),
        }?;

        Some(Self {
            role,
            index: index as u8,
        })
    }

    /// чамо в заданной позиции для выбранного представления
    #[inline(always)]
    pub fn parse(c: char, role: Role, representation: Representation) -> Option<Self>
    {
        match representation {
            Representation::Hcj => Self::from_hcj(c, role),
            Representation::Jamo => Self::from_positional(c).filter(|jamo| jamo.role == role),
        }
    }

    #[inline(always)]
    pub const fn role(&self) -> Role
    {
        self.role
    }

    #[inline(always)]
    pub const fn index(&self) -> u32
    {
        self.index as u32
    }

    /// совместимое чамо
    #[inline(always)]
    pub fn hcj(&self) -> char
    {
        let index = self.index as usize;

        match self.role {
            Role::Lead => HCJ_LEADS[index],
            Role::Vowel => HCJ_VOWELS[index],
            // индекс завершающей согласной никогда не равен 0
            Role::Tail => HCJ_TAILS[index].unwrap_or_default(),
        }
    }

    /// позиционное чамо
    #[inline(always)]
    pub fn positional(&self) -> char
    {
        let base = match self.role {
            Role::Lead => JAMO_LEAD_BASE,
            Role::Vowel => JAMO_VOWEL_BASE,
            Role::Tail => JAMO_TAIL_BASE,
        };

        // все позиционные чамо лежат в BMP вне суррогатов
        unsafe { char::from_u32_unchecked(base + self.index as u32) }
    }

    /// символ чамо в выбранном представлении
    #[inline(always)]
    pub fn to_char(&self, representation: Representation) -> char
    {
        match representation {
            Representation::Hcj => self.hcj(),
            Representation::Jamo => self.positional(),
        }
    }
}

impl fmt::Display for Jamo
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{} ({} {})", self.hcj(), self.role, self.index)
    }
}
