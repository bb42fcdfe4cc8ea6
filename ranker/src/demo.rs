use crate::SourceDoc;

/// Six sentences about one basketball player, ranked by `docrank --demo`.
pub const DEMO_TEXTS: [&str; 6] = [
    "born December 30, 1984 is an American professional basketball player for the Los Angeles Lakers of the National Basketball Association (NBA).",
    "He is widely considered to be one of the greatest basketball players in NBA history, and discussions ranking him as the greatest basketball player of all time have often been subject to significant debate, with frequent comparisons to Michael Jordan.[1]",
    "James's teams have played in eight consecutive NBA Finals (2011–2018 seasons) between the Miami Heat and Cleveland Cavaliers.",
    "His accomplishments include three NBA championships, four NBA Most Valuable Player (MVP) Awards, three Finals MVP Awards, and two Olympic gold medals.",
    "James holds the all-time record for playoffs points, is third in all-time points, and eighth in all-time assists.",
    "James was selected to the All-NBA First Team twelve times (all-time record), made he All-Defensive First Team five times, and has played in sixteen All-Star Games, in which he was selected All-Star MVP three times.",
];

pub fn documents() -> Vec<SourceDoc> {
    DEMO_TEXTS
        .iter()
        .enumerate()
        .map(|(i, text)| SourceDoc { id: format!("demo#{i}"), text: text.to_string() })
        .collect()
}
