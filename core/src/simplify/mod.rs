//! Canonicalisation of generated expressions.
//!
//! A [`Simplifier`] is an ordered list of [`RewriteRule`]s. The order is part of
//! the contract: later rules rely on the artifacts removed by earlier ones (for
//! example `eps**1` is only aliased to `e1` once [`UnitPower`] has turned it into
//! a bare `eps`).

mod rules;
mod wrap;

pub use rules::{AdditiveZero, MultiplicativeIdentity, SymbolAliasing, UnitPower, ZeroPower};
pub use wrap::LineWrapper;

use crate::expr::Expr;

pub trait RewriteRule: Send + Sync {
    /// Human readable name, used in log output.
    fn name(&self) -> &'static str;

    /// Rewrites a single node whose children have already been rewritten.
    fn rewrite_node(&self, node: Expr) -> Expr;

    /// Applies the rule to a whole tree, leaves first.
    fn apply(&self, expr: Expr) -> Expr {
        expr.rewrite_bottom_up(&mut |node| self.rewrite_node(node))
    }
}

pub struct Simplifier {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl Simplifier {
    pub fn new(rules: Vec<Box<dyn RewriteRule>>) -> Self {
        Self { rules }
    }

    /// The standard pass order, finished by the given aliasing rule.
    pub fn standard(aliasing: SymbolAliasing) -> Self {
        Self::new(vec![
            Box::new(ZeroPower),
            Box::new(UnitPower),
            Box::new(MultiplicativeIdentity),
            Box::new(AdditiveZero),
            Box::new(aliasing),
        ])
    }

    pub fn rules(&self) -> &[Box<dyn RewriteRule>] {
        &self.rules
    }

    pub fn simplify(&self, expr: Expr) -> Expr {
        self.rules.iter().fold(expr, |expr, rule| {
            let rewritten = rule.apply(expr);
            log::trace!("after {}: {rewritten}", rule.name());
            rewritten
        })
    }
}
