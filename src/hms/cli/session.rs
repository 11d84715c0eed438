use super::print::{print_header, print_messages, print_overview, print_records, Fields};
use super::prompt::Prompter;
use colored::Colorize;
use hms::api::{CmdResult, DoctorUpdate, HmsApi, InventoryUpdate};
use hms::auth::{LoginOutcome, SessionGate};
use hms::config::HmsConfig;
use hms::error::{HmsError, Result};
use hms::model::{Appointment, Doctor, InventoryItem, Patient, Staff};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPatient,
    SearchPatients,
    DeletePatient,
    AddStaff,
    StaffByRole,
    DeleteStaff,
    AddDoctor,
    EditDoctor,
    DoctorsByDesignation,
    DeleteDoctor,
    AddInventory,
    UpdateInventory,
    LowStock,
    DeleteInventory,
    AddAppointment,
    ListAppointments,
    CancelAppointment,
    ShowAll,
    Exit,
}

impl MenuChoice {
    /// Menu order; an entry's number is its position plus one.
    pub const ALL: [MenuChoice; 19] = [
        MenuChoice::AddPatient,
        MenuChoice::SearchPatients,
        MenuChoice::DeletePatient,
        MenuChoice::AddStaff,
        MenuChoice::StaffByRole,
        MenuChoice::DeleteStaff,
        MenuChoice::AddDoctor,
        MenuChoice::EditDoctor,
        MenuChoice::DoctorsByDesignation,
        MenuChoice::DeleteDoctor,
        MenuChoice::AddInventory,
        MenuChoice::UpdateInventory,
        MenuChoice::LowStock,
        MenuChoice::DeleteInventory,
        MenuChoice::AddAppointment,
        MenuChoice::ListAppointments,
        MenuChoice::CancelAppointment,
        MenuChoice::ShowAll,
        MenuChoice::Exit,
    ];

    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddPatient => "Add Patient",
            MenuChoice::SearchPatients => "Search Patients by Name",
            MenuChoice::DeletePatient => "Delete Patient",
            MenuChoice::AddStaff => "Add Staff",
            MenuChoice::StaffByRole => "List Staff by Role",
            MenuChoice::DeleteStaff => "Delete Staff",
            MenuChoice::AddDoctor => "Add Doctor",
            MenuChoice::EditDoctor => "Edit Doctor",
            MenuChoice::DoctorsByDesignation => "List Doctors by Designation",
            MenuChoice::DeleteDoctor => "Delete Doctor",
            MenuChoice::AddInventory => "Add Inventory Item",
            MenuChoice::UpdateInventory => "Update Inventory",
            MenuChoice::LowStock => "List Low Stock Items",
            MenuChoice::DeleteInventory => "Delete Inventory Item",
            MenuChoice::AddAppointment => "Add Appointment",
            MenuChoice::ListAppointments => "List Appointments",
            MenuChoice::CancelAppointment => "Cancel Appointment",
            MenuChoice::ShowAll => "Show All Information",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub struct Session<R, W> {
    api: HmsApi,
    io: Prompter<R, W>,
    config: HmsConfig,
}

/// Runs the banner, login gate and menu loop until the operator exits.
///
/// Returns `Auth` when the login attempts run out.
pub fn run_session<R: BufRead, W: Write>(config: HmsConfig, input: R, output: W) -> Result<()> {
    let mut session = Session {
        api: HmsApi::new(),
        io: Prompter::new(input, output),
        config,
    };

    session.header("Welcome to the Hospital Management System")?;
    if !session.login()? {
        writeln!(
            session.io.out(),
            "{}",
            "Too many failed attempts. Exiting.".red()
        )?;
        return Err(HmsError::Auth("too many failed attempts".into()));
    }
    session.menu_loop()
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn header(&mut self, text: &str) -> Result<()> {
        print_header(self.io.out(), text, self.config.header_width)?;
        Ok(())
    }

    fn login(&mut self) -> Result<bool> {
        let mut gate = SessionGate::new(self.config.credentials(), self.config.max_login_attempts);
        while !gate.is_locked() {
            let operator = self.io.ask("Enter username")?;
            let password = self.io.ask("Enter password")?;
            match gate.attempt(&operator, &password) {
                LoginOutcome::Granted => {
                    writeln!(self.io.out(), "{}", "Login successful!".green())?;
                    return Ok(true);
                }
                LoginOutcome::Denied { remaining } => {
                    writeln!(
                        self.io.out(),
                        "{}",
                        format!("Invalid credentials. {} attempt(s) left.", remaining).yellow()
                    )?;
                }
                LoginOutcome::LockedOut => break,
            }
        }
        Ok(false)
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let answer = match self.io.ask("Enter your choice") {
                Ok(answer) => answer,
                Err(HmsError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };

            let choice = answer.trim().parse().ok().and_then(MenuChoice::from_number);
            let Some(choice) = choice else {
                writeln!(
                    self.io.out(),
                    "{}",
                    "Invalid choice! Please try again.".red()
                )?;
                continue;
            };
            debug!(?choice, "menu selection");

            if choice == MenuChoice::Exit {
                writeln!(self.io.out(), "Exiting the system. Goodbye!")?;
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(e @ (HmsError::DuplicateKey { .. } | HmsError::NotFound { .. })) => {
                    writeln!(self.io.out(), "{}", format!("Error: {}", e).red())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        self.header("Main Menu")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.io.out(), "{:>2}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        self.header(choice.label())?;
        match choice {
            MenuChoice::AddPatient => {
                let patient = Patient::new(
                    self.io.ask_int("Enter patient ID")?,
                    self.io.ask("Enter patient name")?,
                    self.io.ask_int("Enter patient age")?,
                    self.io.ask("Enter patient gender")?,
                    self.io.ask("Enter patient diagnosis")?,
                );
                let result = self.api.add(patient)?;
                self.show(&result)
            }
            MenuChoice::SearchPatients => {
                let name = self.io.ask("Enter patient name to search")?;
                let result = self.api.search_patients(&name)?;
                self.show(&result)
            }
            MenuChoice::DeletePatient => {
                let id = self.io.ask_int("Enter patient ID to delete")?;
                let result = self.api.delete::<Patient>(id)?;
                self.show(&result)
            }
            MenuChoice::AddStaff => {
                let staff = Staff::new(
                    self.io.ask_int("Enter staff ID")?,
                    self.io.ask("Enter staff name")?,
                    self.io.ask("Enter staff role")?,
                    self.io.ask("Enter staff shift")?,
                );
                let result = self.api.add(staff)?;
                self.show(&result)
            }
            MenuChoice::StaffByRole => {
                let role = self.io.ask("Enter role to filter staff by")?;
                let result = self.api.staff_by_role(&role)?;
                self.show(&result)
            }
            MenuChoice::DeleteStaff => {
                let id = self.io.ask_int("Enter staff ID to delete")?;
                let result = self.api.delete::<Staff>(id)?;
                self.show(&result)
            }
            MenuChoice::AddDoctor => {
                let doctor = Doctor::new(
                    self.io.ask_int("Enter doctor ID")?,
                    self.io.ask("Enter doctor name")?,
                    self.io.ask("Enter doctor designation")?,
                    self.io.ask("Enter doctor phone")?,
                );
                let result = self.api.add(doctor)?;
                self.show(&result)
            }
            MenuChoice::EditDoctor => {
                let id = self.io.ask_int("Enter doctor ID to edit")?;
                let update = DoctorUpdate {
                    name: self.io.ask_optional("Enter new name (leave blank to skip)")?,
                    designation: self
                        .io
                        .ask_optional("Enter new designation (leave blank to skip)")?,
                    phone: self.io.ask_optional("Enter new phone (leave blank to skip)")?,
                };
                let result = self.api.edit_doctor(id, &update)?;
                self.show(&result)
            }
            MenuChoice::DoctorsByDesignation => {
                let designation = self.io.ask("Enter designation to filter doctors by")?;
                let result = self.api.doctors_by_designation(&designation)?;
                self.show(&result)
            }
            MenuChoice::DeleteDoctor => {
                let id = self.io.ask_int("Enter doctor ID to delete")?;
                let result = self.api.delete::<Doctor>(id)?;
                self.show(&result)
            }
            MenuChoice::AddInventory => {
                let item = InventoryItem::new(
                    self.io.ask_int("Enter item ID")?,
                    self.io.ask("Enter item name")?,
                    self.io.ask_int("Enter item quantity")?,
                );
                let result = self.api.add(item)?;
                self.show(&result)
            }
            MenuChoice::UpdateInventory => {
                let id = self.io.ask_int("Enter inventory item ID to update")?;
                let update = InventoryUpdate {
                    item_name: self
                        .io
                        .ask_optional("Enter new item name (leave blank to skip)")?,
                    quantity: self
                        .io
                        .ask_optional_int("Enter new quantity (leave blank to skip)")?,
                };
                let result = self.api.update_inventory(id, &update)?;
                self.show(&result)
            }
            MenuChoice::LowStock => {
                let default = self.config.low_stock_threshold;
                let threshold = self
                    .io
                    .ask_optional_int(&format!("Enter stock threshold [{}]", default))?
                    .unwrap_or(default);
                let result = self.api.low_stock(threshold)?;
                self.show(&result)
            }
            MenuChoice::DeleteInventory => {
                let id = self.io.ask_int("Enter inventory item ID to delete")?;
                let result = self.api.delete::<InventoryItem>(id)?;
                self.show(&result)
            }
            MenuChoice::AddAppointment => {
                let appointment = Appointment::new(
                    self.io.ask_int("Enter appointment ID")?,
                    self.io.ask_int("Enter patient ID")?,
                    self.io.ask_int("Enter doctor ID")?,
                    self.io.ask("Enter appointment date (YYYY-MM-DD)")?,
                    self.io.ask("Enter appointment time (HH:MM)")?,
                );
                let result = self.api.add(appointment)?;
                self.show(&result)
            }
            MenuChoice::ListAppointments => {
                let result = self.api.list::<Appointment>()?;
                self.show(&result)
            }
            MenuChoice::CancelAppointment => {
                let id = self.io.ask_int("Enter appointment ID to cancel")?;
                let result = self.api.cancel_appointment(id)?;
                self.show(&result)
            }
            MenuChoice::ShowAll => {
                let overview = self.api.overview()?;
                print_overview(self.io.out(), &overview, self.config.header_width)?;
                Ok(())
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn show<T: Fields>(&mut self, result: &CmdResult<T>) -> Result<()> {
        let out = self.io.out();
        print_records(out, &result.listed)?;
        print_messages(out, &result.messages)?;
        Ok(())
    }
}
