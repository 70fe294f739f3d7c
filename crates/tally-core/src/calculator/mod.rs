//! Calculator engine: operand accumulation and single pending operator.
//!
//! The [`Calculator`] owns all expression state and exposes it only through
//! its operations, so the invariants below hold at every observable point:
//!
//! - at most one operator is pending; entering another evaluates the first
//! - the operand being typed contains at most one decimal point
//! - a minus sign is only ever the first character of an operand, typed while
//!   the operand was still empty
//! - after a successful evaluation the result is both the displayed value and
//!   the left operand of the next chained operation
//!
//! ```text
//!   digits ──▶ current_input ──(operator)──▶ previous_input + operator
//!                    ▲                                │
//!                    └──────(evaluate: result)────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use tally_core::calculator::{Calculator, Operator, Symbol};
//!
//! # fn main() -> tally_core::Result<()> {
//! let mut calc = Calculator::new();
//! calc.append_symbol(Symbol::Digit(5))?;
//! calc.append_symbol(Symbol::Operator(Operator::Add))?;
//! calc.append_symbol(Symbol::Digit(3))?;
//! calc.evaluate()?;
//! assert_eq!(calc.display(), "8");
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};

pub mod builder;
pub mod memory;
pub mod surface;
pub mod symbol;


pub use builder::{CalculatorBuilder, DEFAULT_PRECISION};
pub use memory::{MemoryRegister, DEFAULT_MEMORY_LIMIT};
pub use surface::{Headless, Surface, ERROR_TEXT, ZERO_TEXT};
pub use symbol::{Operator, Symbol};

use crate::{
    error::{Result, TallyError},
    number::{format_decimal, parse_operand, round_to},
};

/// Calculator engine for one session.
#[derive(Debug)]
pub struct Calculator<S = Headless> {
    current_input: String,
    previous_input: String,
    operator: Option<Operator>,
    is_new_calculation: bool,
    display: String,
    memory: MemoryRegister,
    precision: u32,
    surface: S,
}

impl Calculator {
    /// Creates a headless calculator with default settings.
    pub fn new() -> Self {
        Self::from_parts(MemoryRegister::default(), DEFAULT_PRECISION, Headless)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Calculator<S> {
    pub(crate) fn from_parts(memory: MemoryRegister, precision: u32, surface: S) -> Self {
        let mut calc = Self {
            current_input: String::new(),
            previous_input: String::new(),
            operator: None,
            is_new_calculation: false,
            display: String::new(),
            memory,
            precision,
            surface,
        };
        calc.show(ZERO_TEXT.to_string());
        calc
    }

    /// Operand currently being typed, possibly empty.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Operand or result carried forward from the previous step.
    pub fn previous_input(&self) -> &str {
        &self.previous_input
    }

    /// Operator awaiting its second operand.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the last operation produced a result, so that the next digit
    /// starts a fresh operand.
    pub fn is_new_calculation(&self) -> bool {
        self.is_new_calculation
    }

    /// Text most recently written to the surface.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current memory register contents.
    pub fn memory(&self) -> f64 {
        self.memory.value()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Types a digit, decimal point or operator.
    ///
    /// An operator on an empty operand is only accepted as a leading minus
    /// sign. An operator on a typed operand moves it into the left-hand
    /// position, evaluating any pending operation first. A second decimal
    /// point in one operand is ignored.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidSymbol` for digits outside 0-9, and any
    /// error from the chained evaluation, in which case the operator is not
    /// entered and the calculator is in its error state.
    pub fn append_symbol(&mut self, symbol: Symbol) -> Result<()> {
        if !symbol.is_valid() {
            return Err(TallyError::InvalidSymbol {
                symbol: format!("{symbol:?}"),
            });
        }

        if self.is_new_calculation && !symbol.is_operator() {
            self.current_input.clear();
            self.is_new_calculation = false;
        }

        match symbol {
            Symbol::Operator(op) => self.enter_operator(op)?,
            Symbol::Point if self.current_input.contains('.') => {}
            _ => self.current_input.push(symbol.as_char()),
        }

        self.refresh_display();
        Ok(())
    }

    fn enter_operator(&mut self, op: Operator) -> Result<()> {
        if self.current_input.is_empty() {
            if op == Operator::Subtract {
                self.current_input.push(op.as_char());
            }
            return Ok(());
        }

        // A bare sign or point is not an operand yet.
        if parse_operand(&self.current_input).is_none() {
            return Ok(());
        }

        if !self.previous_input.is_empty() && self.operator.is_some() {
            self.evaluate()?;
        }

        self.operator = Some(op);
        self.previous_input = std::mem::take(&mut self.current_input);
        self.is_new_calculation = false;
        Ok(())
    }

    /// Evaluates the pending operation.
    ///
    /// Returns `Ok(None)` without touching any state when there is no
    /// complete `lhs op rhs` to evaluate. On success the result, rounded to
    /// the configured precision, becomes both operands' text so that a
    /// following operator chains from it.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::DivisionByZero` for a zero divisor and
    /// `TallyError::Overflow` for a non-finite result. Either way the
    /// expression is cleared and the surface shows [`ERROR_TEXT`].
    pub fn evaluate(&mut self) -> Result<Option<f64>> {
        let Some(op) = self.operator else {
            return Ok(None);
        };
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&self.previous_input),
            parse_operand(&self.current_input),
        ) else {
            return Ok(None);
        };

        if op == Operator::Divide && rhs == 0.0 {
            return Err(self.fail(TallyError::DivisionByZero));
        }

        let result = round_to(op.apply(lhs, rhs), self.precision);
        if !result.is_finite() {
            return Err(self.fail(TallyError::Overflow));
        }

        let text = format_decimal(result);
        debug!("evaluated {lhs} {op} {rhs} = {text}");

        self.previous_input = text.clone();
        self.current_input = text;
        self.operator = None;
        self.is_new_calculation = true;
        self.refresh_display();
        Ok(Some(result))
    }

    /// Removes the last typed character.
    ///
    /// Emptying the operand leaves it empty (not `"0"`) and shows the zero
    /// text. Does nothing on an empty operand.
    pub fn delete_last(&mut self) {
        if self.current_input.pop().is_none() {
            return;
        }
        if self.current_input.is_empty() {
            self.show(ZERO_TEXT.to_string());
        } else {
            self.refresh_display();
        }
    }

    /// Resets the expression. The memory register is kept.
    pub fn clear(&mut self) {
        self.reset_expression();
        self.show(ZERO_TEXT.to_string());
    }

    /// Stores the typed operand, or the displayed value when nothing is
    /// typed, in the memory register.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidOperand` if that text is not a number
    /// (e.g. the error text), leaving the register unchanged, and
    /// `TallyError::MemoryOverflow` if the value was clamped.
    pub fn store(&mut self) -> Result<f64> {
        let value = self.operand_value()?;
        self.memory.set(value)
    }

    /// Places the memory register's value in the operand being typed.
    /// Digits typed next extend it, even right after a result.
    pub fn recall(&mut self) {
        self.current_input = format_decimal(self.memory.value());
        self.is_new_calculation = false;
        self.refresh_display();
    }

    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }

    /// Adds the typed operand, or the displayed value, to the memory
    /// register.
    ///
    /// # Errors
    ///
    /// Same as [`store`](Self::store); on `MemoryOverflow` the register
    /// holds the clamped bound.
    pub fn add_to_memory(&mut self) -> Result<f64> {
        let value = self.operand_value()?;
        self.memory.add(value)
    }

    fn operand_value(&self) -> Result<f64> {
        let text = if self.current_input.is_empty() {
            &self.display
        } else {
            &self.current_input
        };
        parse_operand(text).ok_or_else(|| TallyError::InvalidOperand { text: text.clone() })
    }

    fn fail(&mut self, err: TallyError) -> TallyError {
        warn!("evaluation failed: {err}");
        self.reset_expression();
        self.show(ERROR_TEXT.to_string());
        err
    }

    fn reset_expression(&mut self) {
        self.current_input.clear();
        self.previous_input.clear();
        self.operator = None;
        self.is_new_calculation = false;
    }

    fn refresh_display(&mut self) {
        let text = if !self.current_input.is_empty() {
            self.current_input.clone()
        } else if !self.previous_input.is_empty() {
            self.previous_input.clone()
        } else {
            ZERO_TEXT.to_string()
        };
        self.show(text);
    }

    fn show(&mut self, text: String) {
        self.surface.show(&text);
        self.display = text;
    }
}
