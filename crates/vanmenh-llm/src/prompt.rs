//! Prompt construction for a yearly Tử Vi reading.

use vanmenh_common::BirthProfile;

use crate::backend::Message;

const SYSTEM_PROMPT: &str =
    "You are a master of Tử Vi Đẩu Số (Purple Star Astrology). Answer in detailed Markdown.";

/// Build the two-message request (system + user) for one reading.
/// The message list is constructed once per submission and never mutated.
pub fn reading_messages(profile: &BirthProfile) -> Vec<Message> {
    let year = profile.target_year();
    let time_of_birth = profile.time_of_birth.as_deref().unwrap_or("unknown");
    let gender = profile.gender.as_deref().unwrap_or("unspecified");

    let prompt = format!(
        "Take the role of a veteran master of Tử Vi Đẩu Số and Feng Shui.\n\
         Interpret the destiny for the year {year} for this person:\n\
         - Full name: {name}\n\
         - Born on: {dob} - Hour: {time_of_birth}\n\
         - Gender: {gender}\n\
         \n\
         Reading requirements:\n\
         1. Tone: solemn and mystical, but modern, easy to understand, positive.\n\
         2. Format: clear Markdown.\n\
         \n\
         Detailed content:\n\
         1. **Overview**: governing star, age-related obstacles.\n\
         2. **Career**: opportunities and challenges.\n\
         3. **Wealth**: money flowing in and out.\n\
         4. **Love**: family life, romantic prospects.\n\
         5. **Health**: ailments to watch for.\n\
         \n\
         Close with the single most heartfelt piece of advice.",
        name = profile.name,
        dob = profile.date_of_birth,
    );

    vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BirthProfile {
        BirthProfile::new(
            "Nguyen Van A",
            "17/02/1993",
            Some("04:30".to_string()),
            Some("male".to_string()),
            Some("2026".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_builds_system_then_user() {
        let msgs = reading_messages(&profile());
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].role, "system");
        assert_eq!(msgs[1].role, "user");
    }

    #[test]
    fn test_user_prompt_carries_profile_fields() {
        let msgs = reading_messages(&profile());
        let body = &msgs[1].content;
        assert!(body.contains("Nguyen Van A"));
        assert!(body.contains("17/02/1993"));
        assert!(body.contains("04:30"));
        assert!(body.contains("2026"));
    }

    #[test]
    fn test_optional_fields_get_neutral_wording() {
        let p = BirthProfile::new("B", "01/01/2000", None, None, None).unwrap();
        let msgs = reading_messages(&p);
        assert!(msgs[1].content.contains("unknown"));
        assert!(msgs[1].content.contains("unspecified"));
    }
}
