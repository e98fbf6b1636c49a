use crate::{basis::Axis, integrals::Family, simplify::LineWrapper};

/// Surface syntax of the generated source. The default is Fortran free form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialect {
    pub comment_prefix: String,
    /// Opens the first case branch; `{code}` is replaced by the switch code.
    pub first_branch: String,
    /// Opens every later case branch.
    pub next_branch: String,
    pub end_branches: String,
    pub assignment: String,
    pub continuation: char,
    pub line_width: usize,
    pub nuclear_matrix: String,
    pub kinetic_matrix: String,
    pub momentum_matrix: String,
    pub basis_matrix: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            comment_prefix: "!".to_owned(),
            first_branch: "if (isw .eq. {code}) then".to_owned(),
            next_branch: "else if (isw .eq. {code}) then".to_owned(),
            end_branches: "end if".to_owned(),
            assignment: " = ".to_owned(),
            continuation: '&',
            line_width: 79,
            nuclear_matrix: "wn".to_owned(),
            kinetic_matrix: "wo".to_owned(),
            momentum_matrix: "wp".to_owned(),
            basis_matrix: "g".to_owned(),
        }
    }
}

impl Dialect {
    pub fn raw_matrix(&self, family: Family) -> &str {
        match family {
            Family::NuclearAttraction => &self.nuclear_matrix,
            Family::KineticEnergy => &self.kinetic_matrix,
            Family::Momentum => &self.momentum_matrix,
        }
    }

    pub fn branch(&self, first: bool, code: u32) -> String {
        let template = if first {
            &self.first_branch
        } else {
            &self.next_branch
        };
        template.replace("{code}", &code.to_string())
    }

    /// `name(row,col)`, or `name(row,col,axis)` with the axis numbered from 1.
    pub fn element(&self, matrix: &str, row: usize, col: usize, axis: Option<Axis>) -> String {
        match axis {
            Some(axis) => format!("{matrix}({row},{col},{})", axis.index() + 1),
            None => format!("{matrix}({row},{col})"),
        }
    }

    pub fn comment(&self, text: &str) -> String {
        format!("{} {text}", self.comment_prefix)
    }

    pub fn wrapper(&self) -> LineWrapper {
        LineWrapper::new(self.line_width, self.continuation)
    }
}
