use hangeul_jamo::*;

/// основные операции: декомпозиция, сборка, составные чамо, свойства символов
fn main()
{
    let text = "안녕하세요";
    println!("{} -> {}", text, decompose_hcj(text));

    let jamo = "ㅎㅏㄴㄱㅡㄹ";
    println!("{} -> {}", jamo, compose_hcj(jamo));

    let original = "대한민국";
    let decomposed = decompose_jamo(original);
    let recomposed = compose_jamo(&decomposed);
    println!("{} -> {} -> {} ({})", original, decomposed, recomposed, original == recomposed);

    let mixed = "Hello, 한글! How are you?";
    println!("{} -> {}", mixed, decompose_hcj(mixed));

    println!();

    for compound in ['ㄲ', 'ㅘ', 'ㄺ'] {
        match decompose_compound(compound) {
            Ok((first, second)) => println!("{} -> {} + {}", compound, first, second),
            Err(error) => println!("{}", error),
        }
    }

    println!();

    for c in ['한', 'ㄱ', 'ㅏ', 'a', '\u{1100}'] {
        println!(
            "{:?}: слог - {}, совместимое чамо - {}, позиционное чамо - {}",
            c,
            is_hangul_syllable(c),
            is_hcj(c),
            is_jamo(c)
        );
    }

    println!();

    // какие чамо используются в предложении?
    let sentence = "Rust로 한글을 처리합니다.";
    let mut jamo: Vec<char> = decompose_hcj(sentence).chars().filter(|c| is_hcj(*c)).collect();
    let total = jamo.len();

    jamo.sort();
    jamo.dedup();

    println!("{}", sentence);
    println!("всего чамо: {}, уникальных: {}", total, jamo.len());
    println!("{}", jamo.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "));
}
