//! тесты кодека на текстах, сравнение с ICU, случайные и property-based тесты

#[cfg(test)]
mod fuzzing;
