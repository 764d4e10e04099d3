use chrono::DateTime;
use chrono_tz::Tz;

/// Build the channel post for the given label at the given instant.
///
/// Pure function: the same label and instant always produce the same text.
/// Unknown labels fall back to the default heading instead of failing.
pub fn build_post(label: &str, now: DateTime<Tz>) -> String {
    let title = match label {
        "morning" => "<b>АПЛ — утренний бриф ☕</b>",
        "day" => "<b>АПЛ — дневной апдейт ⚽</b>",
        "now" => "<b>АПЛ — свежий апдейт 🔔</b>",
        _ => "<b>АПЛ — апдейт</b>",
    };
    let stamp = now.format("%d.%m.%Y, %H:%M");

    format!(
        "{title}\n\
         📅 {stamp} (МСК)\n\n\
         Манчестер Юнайтед — фокус на прессинг и баланс в центре.\n\
         Ливерпуль — Слот пробует вариации полузащиты.\n\
         Ман Сити — Холанд и Родри в порядке, темп высокий.\n\
         Арсенал — стабильная серия, ротация по флангам.\n\n\
         #АПЛ #новости"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MSK;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Tz> {
        MSK.with_ymd_and_hms(2024, 3, 1, 8, 5, 30).unwrap()
    }

    #[test]
    fn known_labels_pick_their_heading() {
        let now = fixed_instant();
        assert!(build_post("morning", now).contains("утренний бриф"));
        assert!(build_post("day", now).contains("дневной апдейт"));
        assert!(build_post("now", now).contains("свежий апдейт"));
    }

    #[test]
    fn unknown_label_falls_back_to_default_heading() {
        let text = build_post("midnight", fixed_instant());
        assert!(text.starts_with("<b>АПЛ — апдейт</b>"));
    }

    #[test]
    fn timestamp_is_moscow_time_in_fixed_format() {
        let text = build_post("morning", fixed_instant());
        assert!(text.contains("📅 01.03.2024, 08:05 (МСК)"));
    }

    #[test]
    fn same_label_and_instant_give_identical_text() {
        let now = fixed_instant();
        assert_eq!(build_post("day", now), build_post("day", now));
    }

    #[test]
    fn body_and_footer_are_always_present() {
        let text = build_post("now", fixed_instant());
        assert!(text.contains("Манчестер Юнайтед"));
        assert!(text.ends_with("#АПЛ #новости"));
    }
}
