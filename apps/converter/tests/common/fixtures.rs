//! Test fixtures for quiz text.

/// Generate quiz text with `levels` levels of `per_level` questions each.
///
/// Every question has four options and answer `C`.
pub fn sample_quiz_text(levels: usize, per_level: usize) -> String {
    (1..=levels)
        .map(|level| {
            let questions = (1..=per_level)
                .map(|n| {
                    format!(
                        "{n}. Question {n} of level {level}?\nA) first\nB) second\nC) third\nD) fourth\nAnswer: C\n"
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("Level {level}\n{questions}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One good question and one without an answer, in level 1.
pub fn quiz_with_broken_block() -> &'static str {
    "\
Level 1
1. Good question?
A) yes
B) no
Answer: A

2. Missing its answer?
A) yes
B) no
"
}
