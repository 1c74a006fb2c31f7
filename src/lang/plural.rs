use crate::lang::Language;
use crate::time::TimeUnit;

/// Grammatical number category that picks a noun spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralForm {
    One,
    Few,
    Many,
    Other,
}

/// Plural category of `count` under the rules of `lang`.
pub fn select_form(count: u64, lang: Language) -> PluralForm {
    match lang {
        Language::English => {
            if count == 1 {
                PluralForm::One
            } else {
                PluralForm::Other
            }
        }
        Language::Russian => {
            let n10 = count % 10;
            let n100 = count % 100;

            if (11..=14).contains(&n100) {
                PluralForm::Many
            } else if n10 == 1 {
                PluralForm::One
            } else if (2..=4).contains(&n10) {
                PluralForm::Few
            } else {
                PluralForm::Many
            }
        }
    }
}

/// Noun for `unit` in the given plural form.
///
/// English has no `Few`/`Many` and Russian files `Other` under `Many`, so
/// every combination resolves to a word.
pub fn word_for(unit: TimeUnit, form: PluralForm, lang: Language) -> &'static str {
    match lang {
        Language::English => english(unit, form),
        Language::Russian => russian(unit, form),
    }
}

fn english(unit: TimeUnit, form: PluralForm) -> &'static str {
    let (one, other) = match unit {
        TimeUnit::Second => ("second", "seconds"),
        TimeUnit::Minute => ("minute", "minutes"),
        TimeUnit::Hour => ("hour", "hours"),
        TimeUnit::Day => ("day", "days"),
        TimeUnit::Week => ("week", "weeks"),
        TimeUnit::Month => ("month", "months"),
        TimeUnit::Year => ("year", "years"),
    };

    if form == PluralForm::One { one } else { other }
}

fn russian(unit: TimeUnit, form: PluralForm) -> &'static str {
    // [one, few, many]
    let forms = match unit {
        TimeUnit::Second => ["секунда", "секунды", "секунд"],
        TimeUnit::Minute => ["минута", "минуты", "минут"],
        TimeUnit::Hour => ["час", "часа", "часов"],
        TimeUnit::Day => ["день", "дня", "дней"],
        TimeUnit::Week => ["неделя", "недели", "недель"],
        TimeUnit::Month => ["месяц", "месяца", "месяцев"],
        TimeUnit::Year => ["год", "года", "лет"],
    };

    match form {
        PluralForm::One => forms[0],
        PluralForm::Few => forms[1],
        PluralForm::Many | PluralForm::Other => forms[2],
    }
}
