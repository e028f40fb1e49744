pub const QUESTIONS_PER_RUN: u32 = 10;

pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (score * 100 + total / 2) / total
}

pub fn result_message(percentage: u32) -> &'static str {
    match percentage {
        90..=u32::MAX => "Отлично! Ты настоящий знаток трюков!",
        70..=89 => "Хороший результат! Продолжай тренироваться.",
        50..=69 => "Неплохо, но есть куда расти.",
        _ => "Стоит повторить теорию и попробовать ещё раз.",
    }
}
