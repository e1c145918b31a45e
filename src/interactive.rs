use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use chrono::NaiveDate;
use mealprep_planning::MealDiary;

/// Outcome of presenting a proposed plan to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanDecision {
    Accepted,
    /// The user wants these dates re-planned.
    Rework(Vec<NaiveDate>),
}

/// Present `proposal` and ask the user to accept it or name dates to change.
///
/// Takes the reader and writer as parameters so the whole exchange can be
/// driven from tests; the binary passes locked stdin/stdout.
pub fn confirm_plan(
    proposal: &MealDiary,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PlanDecision> {
    writeln!(output, "Proposed meal plan:")?;
    writeln!(output, "{proposal}")?;

    if read_yes_no(input, output, "Sound okay? [Y/N]")? {
        return Ok(PlanDecision::Accepted);
    }

    let planned: Vec<NaiveDate> = proposal.dates().collect();
    let dates = read_dates(input, output, &planned)?;
    Ok(PlanDecision::Rework(dates))
}

fn read_yes_no(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<bool> {
    loop {
        writeln!(output, "{prompt}")?;
        match read_line(input)?.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => writeln!(output, "Please enter Y or N")?,
        }
    }
}

fn read_dates(
    input: &mut impl BufRead,
    output: &mut impl Write,
    planned: &[NaiveDate],
) -> Result<Vec<NaiveDate>> {
    loop {
        writeln!(
            output,
            "Enter the dates to change (YYYY-MM-DD, separated by spaces):"
        )?;
        match parse_dates(&read_line(input)?, planned) {
            Ok(dates) if !dates.is_empty() => return Ok(dates),
            Ok(_) => writeln!(output, "Enter at least one date")?,
            Err(problem) => writeln!(output, "{problem}")?,
        }
    }
}

fn parse_dates(line: &str, planned: &[NaiveDate]) -> Result<Vec<NaiveDate>, String> {
    let mut dates = Vec::new();
    for token in line.split_whitespace() {
        let date = NaiveDate::parse_from_str(token, "%Y-%m-%d")
            .map_err(|_| format!("\"{token}\" is not a YYYY-MM-DD date"))?;
        if !planned.contains(&date) {
            return Err(format!("{date} is not part of the proposed plan"));
        }
        if !dates.contains(&date) {
            dates.push(date);
        }
    }
    Ok(dates)
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the plan was confirmed");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealprep_catalog::{Meal, Meat};
    use std::io::Cursor;

    fn proposal() -> MealDiary {
        [
            (
                NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
                Meal::new("Pizza", Meat::Pork, [], vec![]).unwrap(),
            ),
            (
                NaiveDate::from_ymd_opt(2026, 8, 11).unwrap(),
                Meal::new("Fish Pie", Meat::Fish, [], vec![]).unwrap(),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn run(input: &str) -> (Result<PlanDecision>, String) {
        let mut reader = Cursor::new(input.to_string());
        let mut written = Vec::new();
        let decision = confirm_plan(&proposal(), &mut reader, &mut written);
        (decision, String::from_utf8(written).unwrap())
    }

    #[test]
    fn test_accepts_case_insensitively() {
        let (decision, output) = run("y\n");
        assert_eq!(decision.unwrap(), PlanDecision::Accepted);
        assert!(output.contains("Pizza"));
    }

    #[test]
    fn test_reprompts_on_noise_then_accepts() {
        let (decision, output) = run("maybe\nY\n");
        assert_eq!(decision.unwrap(), PlanDecision::Accepted);
        assert!(output.contains("Please enter Y or N"));
    }

    #[test]
    fn test_rejection_collects_planned_dates() {
        let (decision, _) = run("n\n2026-08-11\n");
        assert_eq!(
            decision.unwrap(),
            PlanDecision::Rework(vec![NaiveDate::from_ymd_opt(2026, 8, 11).unwrap()])
        );
    }

    #[test]
    fn test_dates_outside_the_proposal_are_refused() {
        let (decision, output) = run("n\n2026-08-20\n2026-08-10 2026-08-11\n");
        assert_eq!(
            decision.unwrap(),
            PlanDecision::Rework(vec![
                NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 11).unwrap(),
            ])
        );
        assert!(output.contains("not part of the proposed plan"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (decision, _) = run("");
        assert!(decision.is_err());
    }
}
