use std::collections::HashSet;
use std::time::Duration;
use std::time::Instant;

use hangeul_jamo::*;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// случайный текст из слогов хангыль, один и тот же слог может повторяться подряд
fn random_text(rng: &mut StdRng, length: usize) -> String
{
    (0 .. length)
        .map(|_| char::from_u32(rng.random_range(SYLLABLE_BASE ..= SYLLABLE_LAST)).unwrap())
        .collect()
}

/// случайные предложения: слова из слогов, разделённые пробелами и знаками препинания
fn random_sentence(rng: &mut StdRng, words: usize) -> String
{
    let mut result = String::new();

    for _ in 0 .. words {
        let length = rng.random_range(1 ..= 6);
        result.push_str(&random_text(rng, length));
        result.push([' ', ' ', ' ', ',', '.', '!', '?', '\n'][rng.random_range(0 .. 8)]);
    }

    result
}

fn assert_roundtrip(text: &str)
{
    assert_eq!(compose_hcj(&decompose_hcj(text)), text);
    assert_eq!(compose_jamo(&decompose_jamo(text)), text);
}

#[test]
fn short_texts()
{
    let mut rng = StdRng::seed_from_u64(1);

    for length in [1, 2, 3, 5, 10] {
        for _ in 0 .. 100 {
            assert_roundtrip(&random_text(&mut rng, length));
        }
    }
}

#[test]
fn medium_texts()
{
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0 .. 200 {
        let length = rng.random_range(50 ..= 500);
        assert_roundtrip(&random_text(&mut rng, length));
    }
}

#[test]
fn sentences()
{
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0 .. 200 {
        let words = rng.random_range(1 ..= 40);
        assert_roundtrip(&random_sentence(&mut rng, words));
    }
}

#[test]
fn large_text()
{
    let mut rng = StdRng::seed_from_u64(4);
    let text = random_text(&mut rng, 50_000);

    // 50000 случайных слогов покрывают больше половины всех слогов
    let coverage: HashSet<char> = text.chars().collect();
    assert!(coverage.len() > SYLLABLE_COUNT as usize / 2);

    assert_roundtrip(&text);
}

/// время на символ не растёт с длиной текста
#[test]
fn linear_time()
{
    let mut rng = StdRng::seed_from_u64(5);

    let measure = |text: &str| {
        let start = Instant::now();
        let decomposed = decompose_hcj(text);
        let composed = compose_hcj(&decomposed);
        let elapsed = start.elapsed();

        assert_eq!(composed, text);
        elapsed
    };

    let small = random_text(&mut rng, 4_000);
    let large = random_text(&mut rng, 64_000);

    // прогрев
    measure(&small);

    let small_time = (0 .. 5).map(|_| measure(&small)).min().unwrap();
    let large_time = (0 .. 5).map(|_| measure(&large)).min().unwrap();

    // 16-кратный рост длины; квадратичная сложность дала бы рост в 256 раз
    assert!(
        large_time <= small_time * 64 + Duration::from_millis(5),
        "{:?} vs {:?}",
        small_time,
        large_time
    );
}
