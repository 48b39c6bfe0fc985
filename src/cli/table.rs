use crate::model::Contact;

const NO_WIDTH: usize = 5;
const NAME_WIDTH: usize = 25;
const NUMBER_WIDTH: usize = 18;
const EMAIL_WIDTH: usize = 30;

/// Renders contacts as a fixed-width table with 1-based row numbers.
/// Values wider than their column are printed in full.
pub fn render(contacts: &[Contact]) -> String {
    let rule = "-".repeat(NO_WIDTH + NAME_WIDTH + NUMBER_WIDTH + EMAIL_WIDTH);
    let mut out = String::new();
    out.push_str(&row("No.", "Name", "Number", "Email"));
    out.push_str(&rule);
    out.push('\n');
    for (i, c) in contacts.iter().enumerate() {
        out.push_str(&row(&(i + 1).to_string(), &c.name, &c.number, &c.email));
    }
    out
}

fn row(no: &str, name: &str, number: &str, email: &str) -> String {
    let line = format!(
        "{:<nw$}{:<mw$}{:<pw$}{:<ew$}",
        no,
        name,
        number,
        email,
        nw = NO_WIDTH,
        mw = NAME_WIDTH,
        pw = NUMBER_WIDTH,
        ew = EMAIL_WIDTH,
    );
    format!("{}\n", line.trim_end())
}
