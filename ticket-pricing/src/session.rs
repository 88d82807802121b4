//! Interactive prompt: ticket count, then one age per ticket, then the total.

use std::io::{BufRead, Write};

use crate::error::PricingError;
use crate::pricing::Order;

const COUNT_PROMPT: &str = "Введите количество билетов: ";
const AGE_PROMPT: &str = "Введите возраст посетителя: ";

/// Runs one pricing session and returns the amount printed.
///
/// Lines that are not non-negative integers are reported and the question
/// is asked again.
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<u64, PricingError> {
    let count = ask(&mut input, &mut output, COUNT_PROMPT, "ticket count")?;

    let mut order = Order::new();
    for ticket in 1..=count {
        let age = ask(&mut input, &mut output, AGE_PROMPT, "attendee age")?;
        tracing::debug!(ticket, age, "ticket added");
        order.add_ticket(age);
    }

    let total = order.total();
    tracing::debug!(
        tickets = order.ticket_count(),
        subtotal = order.subtotal(),
        discounted = order.is_discounted(),
        total,
        "order priced"
    );
    writeln!(output, "Итого: {total} рублей")?;
    output.flush()?;
    Ok(total)
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    expected: &'static str,
) -> Result<u32, PricingError> {
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PricingError::UnexpectedEof { expected });
        }
        let answer = line.trim();
        match answer.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                tracing::warn!(input = answer, expected, "rejected input");
                writeln!(output, "Нужно целое неотрицательное число, получено «{answer}»")?;
            }
        }
    }
}
