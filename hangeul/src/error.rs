use crate::jamo::Role;

/// ошибки операций над отдельными чамо и слогами
///
/// операции над текстом не возвращают ошибок - всё, что не является частью
/// распознанной последовательности чамо, переносится в результат без изменений
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JamoError
{
    /// символ не является чамо ожидаемого вида (или не является составным чамо)
    #[error("недопустимое чамо: {0:?} (U+{code:04X})", code = code(.0))]
    InvalidJamo(char),
    /// пара чамо не образует составное чамо
    #[error("пара {0:?} + {1:?} не образует составное чамо")]
    InvalidPair(char, char),
    /// составное чамо всегда состоит ровно из двух простых
    #[error("составное чамо состоит из 2 простых, получено: {0}")]
    InvalidArity(usize),
    /// неизвестная позиция чамо в слоге
    #[error("неизвестная позиция чамо: {0:?}, ожидается lead, vowel или tail")]
    InvalidRole(String),
    /// символ не является слогом хангыль
    #[error("не является слогом хангыль: {0:?} (U+{code:04X})", code = code(.0))]
    NotHangulSyllable(char),
    /// индекс чамо вне допустимого диапазона
    #[error("индекс {index} вне диапазона для позиции {role}")]
    InvalidIndex { role: Role, index: u32 },
}

impl JamoError
{
    /// ошибка относится к классу "недопустимое чамо"?
    pub fn is_invalid_jamo(&self) -> bool
    {
        matches!(
            self,
            Self::InvalidJamo(_) | Self::InvalidPair(_, _) | Self::InvalidArity(_)
        )
    }
}

#[inline(always)]
fn code(c: &char) -> u32
{
    u32::from(*c)
}
