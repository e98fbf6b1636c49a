//! Serialization of generated cases into source text.
use std::io::{self, Write};

use crate::{
    basis::{BasisEntry, RebasingTable},
    boys,
    expr::Expr,
    integrals::Family,
    simplify::{LineWrapper, Simplifier, SymbolAliasing},
};

use super::{CaseOutput, Dialect};

/// Writes wrapped statements and comments in a dialect.
pub struct Emitter<'a, W> {
    writer: W,
    dialect: &'a Dialect,
    wrapper: LineWrapper,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(writer: W, dialect: &'a Dialect) -> Self {
        Self {
            writer,
            dialect,
            wrapper: dialect.wrapper(),
        }
    }

    pub fn comment(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", self.dialect.comment(text))
    }

    /// A line that is written as is, without wrapping.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    pub fn assignment(&mut self, target: &str, value: &str) -> io::Result<()> {
        let statement = format!("{target}{}{value}", self.dialect.assignment);
        for line in self.wrapper.wrap(&statement) {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// The right hand side of a basis assignment: `4*wo(7,7) - 2*wo(7,5) + wo(5,5)`.
fn basis_expression(entry: &BasisEntry, matrix: &str, dialect: &Dialect) -> String {
    let mut text = String::new();

    for (position, term) in entry.terms.iter().enumerate() {
        let element = dialect.element(matrix, term.row, term.col, entry.axis);
        let magnitude = term.weight.abs();

        match (position, term.weight < 0) {
            (0, false) => {}
            (0, true) => text.push('-'),
            (_, false) => text.push_str(" + "),
            (_, true) => text.push_str(" - "),
        }
        if magnitude != 1 {
            text.push_str(&format!("{magnitude}*"));
        }
        text.push_str(&element);
    }

    text
}

/// Writes all cases of a family as one chain of guarded branches.
pub fn write_family<W: Write>(
    writer: W,
    family: Family,
    cases: &[CaseOutput],
    dialect: &Dialect,
) -> io::Result<()> {
    let table = RebasingTable::for_family(family);
    let raw_matrix = dialect.raw_matrix(family);
    let mut emitter = Emitter::new(writer, dialect);

    emitter.comment(&format!(
        "{} integrals generated by gtoform",
        family.description()
    ))?;
    emitter.comment(&format!(
        "re-basing table revision {} ({} overridden cells)",
        table.revision,
        table.overrides().len()
    ))?;
    for convention in family.conventions() {
        emitter.comment(convention)?;
    }

    for (index, output) in cases.iter().enumerate() {
        emitter.line(&dialect.branch(index == 0, output.case.switch_code))?;

        for entry in &output.raw {
            let target = dialect.element(raw_matrix, entry.row, entry.col, entry.axis);
            emitter.assignment(&target, &entry.expression.to_string())?;
        }
        for entry in &output.basis {
            let target = dialect.element(&dialect.basis_matrix, entry.row, entry.col, entry.axis);
            emitter.assignment(&target, &basis_expression(entry, raw_matrix, dialect))?;
        }

        log::debug!(
            "wrote case {} of {}: {} raw and {} basis assignments",
            output.case.switch_code,
            family.description(),
            output.raw.len(),
            output.basis.len()
        );
    }

    if !cases.is_empty() {
        emitter.line(&dialect.end_branches)?;
    }

    emitter.into_inner().flush()
}

fn write_boys<W: Write>(
    writer: W,
    dialect: &Dialect,
    title: &str,
    form: fn(u32) -> Expr,
) -> io::Result<()> {
    let simplifier = Simplifier::standard(SymbolAliasing::none());
    let mut emitter = Emitter::new(writer, dialect);

    emitter.comment(title)?;
    for order in 0..=boys::MAX_ORDER {
        let expression = simplifier.simplify(form(order));
        log::trace!("F{order} = {expression}");
        emitter.assignment(&format!("F{order}"), &expression.to_string())?;
    }

    emitter.into_inner().flush()
}

/// `F0` to `F10` in closed form.
pub fn write_boys_closed_form<W: Write>(writer: W, dialect: &Dialect) -> io::Result<()> {
    write_boys(
        writer,
        dialect,
        "Boys function, closed form",
        boys::closed_form,
    )
}

/// `F0` to `F10` as the small-argument series.
pub fn write_boys_series<W: Write>(writer: W, dialect: &Dialect) -> io::Result<()> {
    write_boys(
        writer,
        dialect,
        "Boys function, small argument series",
        boys::series,
    )
}
