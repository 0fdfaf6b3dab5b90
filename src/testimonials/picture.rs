use gloo_file::{futures::read_as_data_url, Blob};

/// Placeholder shown when the name has no usable characters yet.
pub const DEFAULT_INITIALS: &str = "AB";

/// First letter of the first and last name tokens, uppercased. A single
/// token yields a single letter.
pub fn initials(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    let first = match tokens.next() {
        Some(token) => token,
        None => return DEFAULT_INITIALS.to_string(),
    };
    let mut out: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
    if let Some(last) = tokens.last() {
        out.extend(last.chars().take(1).flat_map(char::to_uppercase));
    }
    out
}

/// Reads a chosen image into a data URI, usable both as the preview `src`
/// and as the value stored on the record.
pub async fn read_picture(file: web_sys::File) -> Result<String, String> {
    let blob = Blob::from(file);
    read_as_data_url(&blob).await.map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_names_give_two_letters() {
        assert_eq!(initials("Jane Doe"), "JD");
    }

    #[test]
    fn letters_are_uppercased() {
        assert_eq!(initials("jane doe"), "JD");
    }

    #[test]
    fn single_name_gives_one_letter() {
        assert_eq!(initials("Madhuri"), "M");
    }

    #[test]
    fn middle_names_are_skipped() {
        assert_eq!(initials("Rahul Kumar Gupta"), "RG");
    }

    #[test]
    fn stray_whitespace_is_ignored() {
        assert_eq!(initials("  jane   doe  "), "JD");
    }

    #[test]
    fn empty_or_blank_names_fall_back_to_the_placeholder() {
        assert_eq!(initials(""), DEFAULT_INITIALS);
        assert_eq!(initials("   "), DEFAULT_INITIALS);
    }
}
