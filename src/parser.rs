use crate::error::ParseError;
use crate::srt::{SubRip, Subtitle};
use crate::timecode::{Hours, Millis, MinSec, TimeDuration, Timecode, RANGE_DELIMITER};

use log::debug;
use nom::bytes::complete::{tag, take_till};
use nom::combinator::{all_consuming, verify};
use nom::error::{convert_error, VerboseError};
use nom::{Err, IResult};

/// A canonical time range. Timecode tokens must render to exactly this
/// shape; anything wider, narrower, or differently delimited is rejected.
const SAMPLE_RANGE: &str = "00:02:19,482 --> 00:02:21,609";

/// Sentinel lines appended to the input so the final real cue is flushed
/// by the same path as every other cue.
const SENTINEL_NUMBER: &str = "99999";
const SENTINEL_RANGE: &str = SAMPLE_RANGE;

/// A run of characters up to the next `stop`, of exactly `width` characters.
///
/// The content is deliberately unconstrained: a well-shaped token full of
/// garbage clamps to zero in the field layer instead of failing here.
fn segment<'a>(
    width: usize,
    stop: char,
) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str, VerboseError<&'a str>> {
    verify(take_till(move |c| c == stop), move |s: &str| {
        s.chars().count() == width
    })
}

fn seconds_millis(input: &str) -> IResult<&str, (&str, &str), VerboseError<&str>> {
    let (input, seconds) = segment(2, ',')(input)?;
    let (input, _) = tag(",")(input)?;
    let (input, millis) = segment(3, ',')(input)?;

    Ok((input, (seconds, millis)))
}

fn timecode_fields(input: &str) -> IResult<&str, Timecode, VerboseError<&str>> {
    let (input, hours) = segment(2, ':')(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, minutes) = segment(2, ':')(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, tail) = segment(6, ':')(input)?;
    let (_, (seconds, millis)) = all_consuming(seconds_millis)(tail)?;

    Ok((
        input,
        Timecode {
            hours: Hours::from_token(hours),
            minutes: MinSec::from_token(minutes),
            seconds: MinSec::from_token(seconds),
            milliseconds: Millis::from_token(millis),
        },
    ))
}

pub(crate) fn timecode(input: &str) -> Result<Timecode, ParseError> {
    match all_consuming(timecode_fields)(input) {
        Ok((_, timecode)) => Ok(timecode),
        Err(Err::Error(err)) | Err(Err::Failure(err)) => {
            Err(ParseError::Timecode(convert_error(input, err)))
        }
        Err(Err::Incomplete(_)) => {
            unreachable!("Incomplete data received by non-streaming parser.")
        }
    }
}

pub(crate) fn time_duration(input: &str) -> Result<TimeDuration, ParseError> {
    if input.chars().count() != SAMPLE_RANGE.len() {
        return Err(ParseError::TimeRange(format!(
            "expected exactly {} characters in {:?}",
            SAMPLE_RANGE.len(),
            input
        )));
    }

    let parts: Vec<&str> = input.split(RANGE_DELIMITER).collect();
    if parts.len() != 2 || parts[0].chars().count() != parts[1].chars().count() {
        return Err(ParseError::TimeRange(format!(
            "expected two timecodes separated by {:?} in {:?}",
            RANGE_DELIMITER, input
        )));
    }

    Ok(TimeDuration {
        start: timecode(parts[0])?,
        end: timecode(parts[1])?,
    })
}

/// Best-effort document parser. Never fails.
///
/// Lines are folded through a pending buffer. Whenever the line just read
/// is itself a valid time range, the buffer is inspected: once it holds a
/// complete cue plus the number and time range of the next one, the cue is
/// emitted and the buffer reseeded with those two trailing lines. Cue
/// numbers found in the source are discarded; emitted cues are numbered
/// 1-based in document order. Lines that never form a cue are merged into
/// a neighbouring cue's text or dropped.
pub(crate) fn document(content: &str) -> SubRip {
    let mut subtitles: Vec<Subtitle> = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    let sentinels = [SENTINEL_NUMBER, SENTINEL_RANGE];
    for line in content.lines().chain(sentinels.iter().copied()) {
        pending.push(line);
        if time_duration(line).is_err() {
            continue;
        }

        let stripped: Vec<&str> = pending.iter().copied().filter(|l| !l.is_empty()).collect();
        let ranges: Vec<(usize, TimeDuration)> = stripped
            .iter()
            .enumerate()
            .filter_map(|(at, l)| time_duration(l).ok().map(|range| (at, range)))
            .collect();
        if stripped.len() < 5 || ranges.len() < 2 {
            continue;
        }

        // The buffer now reads [number, range, text..., number, range].
        // The cue body is everything strictly between the first range line
        // and the trailing pair belonging to the next cue.
        let (first_range_at, time) = ranges[0];
        let body = stripped
            .get(first_range_at + 1..stripped.len() - 2)
            .unwrap_or(&[]);
        let mut text = String::new();
        for body_line in body {
            text.push_str(body_line);
            text.push('\n');
        }

        subtitles.push(Subtitle {
            sequential_number: subtitles.len() + 1,
            time,
            text,
        });

        pending = stripped[stripped.len() - 2..].to_vec();
    }

    // Anything beyond the two sentinel lines never formed a cue.
    let leftover = pending
        .iter()
        .filter(|l| !l.is_empty())
        .count()
        .saturating_sub(sentinels.len());
    if leftover > 0 {
        debug!("dropped {} line(s) that did not form a complete cue", leftover);
    }
    debug!("parsed {} cue(s)", subtitles.len());

    SubRip { subtitles }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_cue_document() {
        let input = "1\n00:02:16,612 --> 00:02:19,376\nHello\n\n2\n00:02:19,482 --> 00:02:21,609\nWorld\n";

        let document = document(input);

        assert_eq!(document.subtitles.len(), 2);
        assert_eq!(document.subtitles[0].sequential_number, 1);
        assert_eq!(document.subtitles[0].text, "Hello\n");
        assert_eq!(
            document.subtitles[0].time.to_string(),
            "00:02:16,612 --> 00:02:19,376"
        );
        assert_eq!(document.subtitles[1].sequential_number, 2);
        assert_eq!(document.subtitles[1].text, "World\n");
        assert_eq!(
            document.subtitles[1].time.to_string(),
            "00:02:19,482 --> 00:02:21,609"
        );
    }

    #[test]
    fn test_parse_single_cue_document() {
        let document = document("1\n00:02:16,612 --> 00:02:19,376\nHello\n");

        assert_eq!(document.subtitles.len(), 1);
        assert_eq!(document.subtitles[0].text, "Hello\n");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(document("").subtitles.is_empty());
    }

    #[test]
    fn test_parse_unstructured_input() {
        assert!(document("hello\nworld\n").subtitles.is_empty());
    }

    #[test]
    fn test_parse_absorbs_leading_blank_lines() {
        let document = document("\n\n\n1\n00:02:16,612 --> 00:02:19,376\nHi there\n");

        assert_eq!(document.subtitles.len(), 1);
        assert_eq!(document.subtitles[0].text, "Hi there\n");
    }

    #[test]
    fn test_parse_merges_malformed_trailing_fragment() {
        let input = "1\n00:02:16,612 --> 00:02:19,376\nHello\n\n2\n00:02:19,482 -->\n";

        let document = document(input);

        assert_eq!(document.subtitles.len(), 1);
        assert_eq!(document.subtitles[0].text, "Hello\n2\n00:02:19,482 -->\n");
    }

    // Eighteen cues with irregular source numbering (starts at 12, repeats
    // 12, jumps to 91), runs of extra blank lines, a blank line between a
    // number and its time range, and a single-line cue. All of it parses
    // into cues numbered 1 through 18.
    #[test]
    fn test_parse_renumbers_irregular_document() {
        let input = "\
12
00:00:55,184 --> 00:00:57,167
Come to the house
if you're hungry.

2
00:01:14,805 --> 00:01:16,738
Thank you.

3
00:01:16,738 --> 00:01:19,293
Hey.
Take your hat off.

4
00:01:19,293 --> 00:01:21,019
Oh. Sh




5
00:01:39,347 --> 00:01:41,085
Thank you, darling.
You're welcome.

6
00:01:41,125 --> 00:01:42,557
Have a good day.
You, too.

7
00:01:44,352 --> 00:01:46,984
Jimmy, you ready?

8
00:01:50,393 --> 00:01:52,432
Uh, yeah.
All right, let's go.

91
00:01:57,641 --> 00:01:59,229
Thank you, Ma'am.
You're welcome.

10
00:02:06,064 --> 00:02:07,789
How's the one you rode in on?

11
00:02:07,789 --> 00:02:10,482
Not real broke.
I think they said he's just two.

12
00:02:14,175 --> 00:02:16,143
I said he's not real broke.

13
00:02:16,143 --> 00:02:18,135
We sell the broke ones
around here, Jimmy.

14

00:03:05,975 --> 00:03:07,488
Mama!

15
00:04:02,282 --> 00:04:04,282
Subtitles by the river crew.

16
00:04:17,678 --> 00:04:18,886
What are you doing up?

17
00:04:18,886 --> 00:04:21,785
My father hasn't called me back.

18
00:04:21,785 --> 00:04:23,166
Worries me.
";

        let document = document(input);

        assert_eq!(document.subtitles.len(), 18);
        for (index, subtitle) in document.subtitles.iter().enumerate() {
            assert_eq!(subtitle.sequential_number, index + 1);
        }
        assert_eq!(document.subtitles[13].text, "Mama!\n");
        assert_eq!(document.subtitles[14].text, "Subtitles by the river crew.\n");
    }
}
