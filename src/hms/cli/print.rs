use colored::Colorize;
use hms::api::{CmdMessage, MessageLevel};
use hms::commands::overview::Overview;
use hms::model::{Appointment, Doctor, InventoryItem, Patient, Record, Staff};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const VALUE_WIDTH: usize = 32;

/// Label/value pairs shown for a record, key excluded.
pub trait Fields: Record {
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl Fields for Patient {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("age", self.age.to_string()),
            ("gender", self.gender.clone()),
            ("diagnosis", self.diagnosis.clone()),
        ]
    }
}

impl Fields for Staff {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("role", self.role.clone()),
            ("shift", self.shift.clone()),
        ]
    }
}

impl Fields for Doctor {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("designation", self.designation.clone()),
            ("phone", self.phone.clone()),
        ]
    }
}

impl Fields for InventoryItem {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("item", self.item_name.clone()),
            ("quantity", self.quantity.to_string()),
        ]
    }
}

impl Fields for Appointment {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("patient", self.patient_id.to_string()),
            ("doctor", self.doctor_id.to_string()),
            ("date", self.date.clone()),
            ("time", self.time.clone()),
        ];
        if let Some(when) = self.scheduled_for() {
            fields.push(("day", when.format("%A").to_string()));
        }
        fields
    }
}

/// A `=` rule, the title centered under it, and another rule.
pub fn print_header<W: Write>(out: &mut W, text: &str, width: usize) -> io::Result<()> {
    let rule = "=".repeat(width);
    let text_width = text.width();
    let left = width.saturating_sub(text_width) / 2;
    let right = width.saturating_sub(text_width + left);

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{}{}{}",
        " ".repeat(left),
        text.bold(),
        " ".repeat(right)
    )?;
    writeln!(out, "{}", rule)
}

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub fn print_records<W: Write, R: Fields>(out: &mut W, records: &[R]) -> io::Result<()> {
    for record in records {
        let body = record
            .fields()
            .into_iter()
            .map(|(label, value)| {
                format!(
                    "{} {}",
                    format!("{}:", label).dimmed(),
                    truncate_to_width(&value, VALUE_WIDTH)
                )
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(
            out,
            "  {} {}",
            format!("#{:<4}", record.key()).yellow(),
            body
        )?;
    }
    Ok(())
}

pub fn print_overview<W: Write>(out: &mut W, overview: &Overview, width: usize) -> io::Result<()> {
    print_section(out, "Patients", &overview.patients, width)?;
    print_section(out, "Staff", &overview.staff, width)?;
    print_section(out, "Doctors", &overview.doctors, width)?;
    print_section(out, "Inventory", &overview.inventory, width)?;
    print_section(out, "Appointments", &overview.appointments, width)
}

fn print_section<W: Write, R: Fields>(
    out: &mut W,
    title: &str,
    records: &[R],
    width: usize,
) -> io::Result<()> {
    print_header(out, title, width)?;
    if records.is_empty() {
        writeln!(out, "{}", "  (none)".dimmed())
    } else {
        print_records(out, records)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
