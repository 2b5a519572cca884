use csv::{Terminator, WriterBuilder};
use std::io::Write;
use thiserror::Error;

use crate::core::skill_pair_counts;
use crate::models::Volunteer;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const VOLUNTEER_HEADER: [&str; 3] = ["Name", "Email", "Skills"];
pub const PAIR_HEADER: [&str; 3] = ["Skill A", "Skill B", "Count"];

/// Analytics CSV with two sections separated by a blank line
///
/// 1. every volunteer with the raw skills string
/// 2. every skill pair shared by at least one volunteer, sorted by pair
pub fn analytics_csv(volunteers: &[Volunteer]) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();

    {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut out);

        writer.write_record(VOLUNTEER_HEADER)?;
        for volunteer in volunteers {
            writer.write_record([&volunteer.name, &volunteer.email, &volunteer.skills])?;
        }
        writer.flush()?;
    }

    out.write_all(b"\n")?;

    {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut out);

        writer.write_record(PAIR_HEADER)?;
        for pair in skill_pair_counts(volunteers.iter().map(|v| v.skills.as_str())) {
            writer.write_record([pair.skill_a, pair.skill_b, pair.count.to_string()])?;
        }
        writer.flush()?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volunteer(id: i64, name: &str, skills: &str) -> Volunteer {
        Volunteer {
            id,
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase()),
            skills: skills.to_string(),
        }
    }

    #[test]
    fn test_two_sections() {
        let volunteers = vec![volunteer(1, "Ann", "a, b"), volunteer(2, "Bo", "a, c")];
        let csv = String::from_utf8(analytics_csv(&volunteers).unwrap()).unwrap();

        assert_eq!(
            csv,
            "Name,Email,Skills\n\
             Ann,ann@example.org,\"a, b\"\n\
             Bo,bo@example.org,\"a, c\"\n\
             \n\
             Skill A,Skill B,Count\n\
             a,b,1\n\
             a,c,1\n"
        );
    }

    #[test]
    fn test_no_volunteers() {
        let csv = String::from_utf8(analytics_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv, "Name,Email,Skills\n\nSkill A,Skill B,Count\n");
    }

    #[test]
    fn test_empty_skills_field() {
        let csv = String::from_utf8(analytics_csv(&[volunteer(1, "Ann", "")]).unwrap()).unwrap();
        assert!(csv.starts_with("Name,Email,Skills\nAnn,ann@example.org,\n"));
    }
}
