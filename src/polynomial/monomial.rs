use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;

use smallvec::SmallVec;

use crate::variables::PVar;

/// A variable raised to a positive power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarPower {
    pub var: PVar,
    pub power: u32,
}

/// A product of variables. The unit monomial `1` has no variables.
///
/// The derived order compares the total degree first and then the variable powers
/// lexicographically, which gives a graded lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Monomial {
    degree: u32,
    /// Sorted by variable, every power is positive.
    vars: SmallVec<[VarPower; 4]>,
}

impl Monomial {
    pub fn unit() -> Monomial {
        Monomial::default()
    }

    pub fn from_var(var: PVar) -> Monomial {
        Monomial::from_var_power(var, 1)
    }

    pub fn from_var_power(var: PVar, power: u32) -> Monomial {
        if power == 0 {
            return Monomial::unit();
        }

        let mut vars = SmallVec::new();
        vars.push(VarPower { var, power });

        Monomial {
            degree: power,
            vars,
        }
    }

    pub fn is_unit(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn total_degree(&self) -> u32 {
        self.degree
    }

    pub fn vars(&self) -> &[VarPower] {
        &self.vars
    }

    /// The exponent of `var` in this monomial, `0` when it does not occur.
    pub fn degree(&self, var: PVar) -> u32 {
        self.vars
            .iter()
            .find(|var_power| var_power.var == var)
            .map(|var_power| var_power.power)
            .unwrap_or(0)
    }

    /// If the monomial is a single variable with power one, returns that variable.
    pub fn as_var(&self) -> Option<PVar> {
        match self.vars.as_slice() {
            [VarPower { var, power: 1 }] => Some(*var),
            _ => None,
        }
    }

    pub fn multiply(&self, other: &Monomial) -> Monomial {
        if self.is_unit() {
            return other.clone();
        }
        if other.is_unit() {
            return self.clone();
        }

        let mut vars: SmallVec<[VarPower; 4]> = SmallVec::new();
        let mut i = 0;
        let mut j = 0;

        while i < self.vars.len() && j < other.vars.len() {
            match self.vars[i].var.cmp(&other.vars[j].var) {
                Ordering::Less => {
                    vars.push(self.vars[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    vars.push(other.vars[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    vars.push(VarPower {
                        var: self.vars[i].var,
                        power: self.vars[i].power + other.vars[j].power,
                    });
                    i += 1;
                    j += 1;
                }
            }
        }
        vars.extend_from_slice(&self.vars[i..]);
        vars.extend_from_slice(&other.vars[j..]);

        Monomial {
            degree: self.degree + other.degree,
            vars,
        }
    }

    /// Divides the monomial by `var^power`. Returns `None` if `var` occurs with a smaller
    /// exponent.
    pub fn div_var(&self, var: PVar, power: u32) -> Option<Monomial> {
        if power == 0 {
            return Some(self.clone());
        }

        let position = self
            .vars
            .iter()
            .position(|var_power| var_power.var == var)?;
        let current = self.vars[position].power;
        if current < power {
            return None;
        }

        let mut vars = self.vars.clone();
        if current == power {
            let _ = vars.remove(position);
        } else {
            vars[position].power = current - power;
        }

        Some(Monomial {
            degree: self.degree - power,
            vars,
        })
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_unit() {
            return write!(f, "1");
        }

        for (i, var_power) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if var_power.power == 1 {
                write!(f, "{}", var_power.var)?;
            } else {
                write!(f, "{}^{}", var_power.var, var_power.power)?;
            }
        }

        Ok(())
    }
}
