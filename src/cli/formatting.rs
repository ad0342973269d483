use comfy_table::Table;
use rust_decimal::Decimal;

use crate::lease::LeaseTerms;
use crate::schedule::ScheduleEntry;

pub fn format_schedule_screen(terms: &LeaseTerms, schedule: &[ScheduleEntry]) -> String {
    let mut components = vec![title(&format!(
        "Rent schedule ({}, {})",
        terms.frequency(),
        terms.payment_method(),
    ))];

    let content = if !schedule.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Payment date", "Amount", "Method"]);

        for entry in schedule.iter() {
            table.add_row(vec![
                entry.payment_date.to_string(),
                entry.amount.to_string(),
                entry.method.to_string(),
            ]);
        }

        let total: Decimal = schedule.iter().map(|entry| entry.amount).sum();
        table.add_row(vec!["Total".to_string(), total.to_string(), "".to_string()]);

        table.to_string()
    } else {
        "No payments scheduled".to_string()
    };
    components.push(content);

    components.push(format!("Release: {}", env!("RELEASE")));

    components.join("\n\n")
}

pub fn format_schedule_json(schedule: &[ScheduleEntry]) -> Result<String, String> {
    serde_json::to_string_pretty(schedule)
        .map(|json| json + "\n")
        .map_err(|why| format!("Could not serialize schedule: {}", why))
}

fn title(string: &str) -> String {
    let string_length = string.len();
    string.to_string() + "\n" + &"=".repeat(string_length)
}
