use crate::srt::Subtitle;

/// Splits cue text into the two halves of a paired-language cue.
///
/// The assignment is an explicit table over the number of newline-split
/// components. The text's trailing newline contributes a final empty
/// component, so a cue of k visible lines lands in the k+1 arm: a
/// single-line cue is duplicated into both halves, a two-line cue
/// contributes one line to each, and so on. Concatenated lines are joined
/// without a separator, and each half carries a single trailing newline.
pub(crate) fn divide_text(text: &str) -> (String, String) {
    let lines: Vec<&str> = text.split('\n').collect();

    match lines.len() {
        2 => (terminated(&lines[..1]), terminated(&lines[..1])),
        3 => (terminated(&lines[..1]), terminated(&lines[1..2])),
        4 => (terminated(&lines[..1]), terminated(&lines[1..3])),
        5 => (terminated(&lines[..2]), terminated(&lines[2..4])),
        6 => (terminated(&lines[..3]), terminated(&lines[3..6])),
        _ => {
            let left = terminated(&lines[..1]);
            let mut rest = &lines[1..];
            if rest.last() == Some(&"") {
                rest = &rest[..rest.len() - 1];
            }
            let mut right = String::new();
            for line in rest {
                right.push_str(line);
                right.push('\n');
            }
            (left, right)
        }
    }
}

/// Concatenates `lines` without separators, terminated with one newline.
fn terminated(lines: &[&str]) -> String {
    let mut side = String::new();
    for line in lines {
        side.push_str(line);
    }
    side.push('\n');
    side
}

/// Reassigns 1-based sequence numbers in document order.
pub(crate) fn renumber(subtitles: Vec<Subtitle>) -> Vec<Subtitle> {
    subtitles
        .into_iter()
        .enumerate()
        .map(|(at, mut subtitle)| {
            subtitle.sequential_number = at + 1;
            subtitle
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_divide_text {
        ($($name:ident: $text:expr => ($left:expr, $right:expr),)*) => {
        $(
            #[test]
            fn $name() {
                let (left, right) = divide_text($text);

                assert_eq!(left, $left);
                assert_eq!(right, $right);
            }
        )*
        }
    }

    test_divide_text! {
        // A single visible line cannot be bisected; it is kept in both
        // halves.
        test_divide_one_line: "We made it.\n" => ("We made it.\n", "We made it.\n"),
        test_divide_unterminated_pair: "first\nsecond" => ("first\n", "first\n"),
        test_divide_two_lines: "Bonjour\nHello\n" => ("Bonjour\n", "Hello\n"),
        test_divide_three_lines: "a\nb\nc\n" => ("a\n", "bc\n"),
        test_divide_four_lines: "a\nb\nc\nd\n" => ("ab\n", "cd\n"),
        test_divide_five_lines: "a\nb\nc\nd\ne\n" => ("abc\n", "de\n"),
        test_divide_six_lines: "a\nb\nc\nd\ne\nf\n" => ("a\n", "b\nc\nd\ne\nf\n"),
        test_divide_bare_line: "solo" => ("solo\n", ""),
    }

    #[test]
    fn test_renumber() {
        let subtitles = vec![
            Subtitle {
                sequential_number: 5,
                time: "00:02:16,612 --> 00:02:19,376".parse().unwrap(),
                text: "Hello\n".to_string(),
            },
            Subtitle {
                sequential_number: 9,
                time: "00:02:19,482 --> 00:02:21,609".parse().unwrap(),
                text: "World\n".to_string(),
            },
        ];

        let renumbered = renumber(subtitles);

        assert_eq!(renumbered[0].sequential_number, 1);
        assert_eq!(renumbered[1].sequential_number, 2);
    }
}
