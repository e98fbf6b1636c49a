use crate::{
    basis::{Axis, Triad},
    expr::Expr,
    simplify::{Simplifier, SymbolAliasing},
};

pub mod kinetic;
pub mod momentum;
pub mod nuclear;
pub mod overlap;

pub type DefaultIntegrator = ClosedForm;

pub trait Integrator: Send + Sync {
    type Function;

    /// Expand the overlap integral between two functions.
    fn overlap(&self, functions: (&Self::Function, &Self::Function)) -> Expr;

    /// Expand the kinetic energy integral between two functions.
    fn kinetic(&self, functions: (&Self::Function, &Self::Function)) -> Expr;

    /// Expand the nuclear attraction integral between two functions and a single nucleus.
    fn nuclear(&self, functions: (&Self::Function, &Self::Function)) -> Expr;

    /// Expand the linear momentum integral between two functions along one axis.
    fn momentum(&self, functions: (&Self::Function, &Self::Function), axis: Axis) -> Expr;
}

/// Closed-form expansions over Cartesian triads.
#[derive(Default)]
pub struct ClosedForm;

impl Integrator for ClosedForm {
    type Function = Triad;

    fn overlap(&self, functions: (&Triad, &Triad)) -> Expr {
        let (&a, &b) = functions;
        overlap::primitive_overlap(a, b)
    }

    fn kinetic(&self, functions: (&Triad, &Triad)) -> Expr {
        let (&a, &b) = functions;
        kinetic::primitive_kinetic(a, b)
    }

    fn nuclear(&self, functions: (&Triad, &Triad)) -> Expr {
        let (&a, &b) = functions;
        nuclear::primitive_nuclear(a, b)
    }

    fn momentum(&self, functions: (&Triad, &Triad), axis: Axis) -> Expr {
        let (&a, &b) = functions;
        momentum::primitive_momentum(a, b, axis)
    }
}

/// The integral families the generator produces code for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    NuclearAttraction,
    KineticEnergy,
    Momentum,
}

/// Which orbital index runs in the outer loop when a case is enumerated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PairOrder {
    FirstOuter,
    SecondOuter,
}

impl Family {
    pub const ALL: [Family; 3] = [
        Family::NuclearAttraction,
        Family::KineticEnergy,
        Family::Momentum,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Family::NuclearAttraction => "nuclear attraction",
            Family::KineticEnergy => "kinetic energy",
            Family::Momentum => "linear momentum",
        }
    }

    /// Expansion conventions recorded in the header of generated files.
    pub fn conventions(self) -> &'static [&'static str] {
        match self {
            Family::KineticEnergy => &["lowered overlaps S(b-2) weighted -(l**2 - l)/2 per axis"],
            Family::NuclearAttraction | Family::Momentum => &[],
        }
    }

    /// The simplifier for this family. Nuclear attraction aliases powers of `eps`,
    /// the overlap based families alias inverse powers of `gam` and `a2**2`.
    pub fn simplifier(self) -> Simplifier {
        Simplifier::standard(match self {
            Family::NuclearAttraction => SymbolAliasing::nuclear_attraction(),
            Family::KineticEnergy | Family::Momentum => SymbolAliasing::overlap(),
        })
    }

    pub fn pair_order(self) -> PairOrder {
        match self {
            Family::NuclearAttraction => PairOrder::FirstOuter,
            Family::KineticEnergy | Family::Momentum => PairOrder::SecondOuter,
        }
    }

    /// The matrix elements computed for every orbital pair, in emission order.
    pub fn integrals(self) -> &'static [Integral] {
        match self {
            Family::NuclearAttraction => &[Integral::NuclearAttraction],
            Family::KineticEnergy => &[Integral::KineticEnergy],
            Family::Momentum => &[
                Integral::Momentum(Axis::X),
                Integral::Momentum(Axis::Y),
                Integral::Momentum(Axis::Z),
            ],
        }
    }
}

/// A single kind of matrix element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Integral {
    NuclearAttraction,
    KineticEnergy,
    Momentum(Axis),
}

impl Integral {
    pub fn axis(self) -> Option<Axis> {
        match self {
            Integral::Momentum(axis) => Some(axis),
            Integral::NuclearAttraction | Integral::KineticEnergy => None,
        }
    }

    pub fn expand<I>(self, integrator: &I, functions: (&I::Function, &I::Function)) -> Expr
    where
        I: Integrator,
    {
        match self {
            Integral::NuclearAttraction => integrator.nuclear(functions),
            Integral::KineticEnergy => integrator.kinetic(functions),
            Integral::Momentum(axis) => integrator.momentum(functions, axis),
        }
    }
}
