use std::iter::FromIterator;

use crate::frontend::ast::ChainOperator;
use crate::values::{from_bool, is_truthy, Value, ValueError};

// One assignment suffix with its right operand already evaluated. Applying it
// to the running accumulator `x` computes `x <op> operand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(Value),
    Sub(Value),
    Mul(Value),
    Div(Value),
    Eq(Value),
    Gt(Value),
    And(Value),
    Or(Value),
}

impl Operation {
    pub fn bind(operator: ChainOperator, operand: Value) -> Self {
        match operator {
            ChainOperator::Add => Operation::Add(operand),
            ChainOperator::Sub => Operation::Sub(operand),
            ChainOperator::Mul => Operation::Mul(operand),
            ChainOperator::Div => Operation::Div(operand),
            ChainOperator::Eq => Operation::Eq(operand),
            ChainOperator::Gt => Operation::Gt(operand),
            ChainOperator::And => Operation::And(operand),
            ChainOperator::Or => Operation::Or(operand),
        }
    }

    // Arithmetic wraps on overflow
    pub fn combine(self, acc: Value) -> Result<Value, ValueError> {
        match self {
            Operation::Add(rhs) => Ok(acc.wrapping_add(rhs)),
            Operation::Sub(rhs) => Ok(acc.wrapping_sub(rhs)),
            Operation::Mul(rhs) => Ok(acc.wrapping_mul(rhs)),
            Operation::Div(0) => Err(ValueError::DivisionByZero(acc)),
            Operation::Div(rhs) => Ok(acc.wrapping_div(rhs)),
            Operation::Eq(rhs) => Ok(from_bool(acc == rhs)),
            Operation::Gt(rhs) => Ok(from_bool(acc > rhs)),
            Operation::And(rhs) => Ok(from_bool(is_truthy(acc) && is_truthy(rhs))),
            Operation::Or(rhs) => Ok(from_bool(is_truthy(acc) || is_truthy(rhs))),
        }
    }
}

// Ordered suffixes of an assignment, applied left to right on the base value.
// There is no precedence: `10 THEN / 2 THEN * 5` is (10 / 2) * 5.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationChain {
    operations: Vec<Operation>,
}

impl OperationChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn apply(&self, base: Value) -> Result<Value, ValueError> {
        self.operations
            .iter()
            .try_fold(base, |acc, operation| operation.combine(acc))
    }
}

impl FromIterator<Operation> for OperationChain {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chain(ops: &[(ChainOperator, Value)]) -> OperationChain {
        ops.iter()
            .map(|(op, operand)| Operation::bind(*op, *operand))
            .collect()
    }

    #[test]
    fn empty_chain_is_identity() {
        assert!(OperationChain::new().is_empty());
        assert_eq!(OperationChain::new().apply(42), Ok(42));
    }

    #[test]
    fn add_then_sub() {
        let ops = chain(&[(ChainOperator::Add, 3), (ChainOperator::Sub, 2)]);

        assert_eq!(ops.len(), 2);
        assert_eq!(ops.apply(5), Ok(6));
    }

    #[test]
    fn no_operator_precedence() {
        let ops = chain(&[(ChainOperator::Div, 2), (ChainOperator::Mul, 5)]);

        // Not 10 / (2 * 5)
        assert_eq!(ops.apply(10), Ok(25));
    }

    #[test]
    fn each_step_uses_the_accumulator() {
        let ops = chain(&[
            (ChainOperator::Mul, 3),
            (ChainOperator::Gt, 10),
            (ChainOperator::Or, 0),
        ]);

        // 4 * 3 = 12, 12 > 10 = 1, 1 OR 0 = 1
        assert_eq!(ops.apply(4), Ok(1));
        // 2 * 3 = 6, 6 > 10 = 0, 0 OR 0 = 0
        assert_eq!(ops.apply(2), Ok(0));
    }

    #[rstest]
    #[case(Operation::Add(4), 3, 7)]
    #[case(Operation::Sub(4), 3, -1)]
    #[case(Operation::Mul(-4), 3, -12)]
    #[case(Operation::Div(2), 7, 3)]
    #[case(Operation::Div(2), -7, -3)]
    #[case(Operation::Eq(3), 3, 1)]
    #[case(Operation::Eq(2), 3, 0)]
    #[case(Operation::Gt(2), 3, 1)]
    #[case(Operation::Gt(3), 3, 0)]
    #[case(Operation::And(5), -1, 1)]
    #[case(Operation::And(0), 1, 0)]
    #[case(Operation::Or(0), 0, 0)]
    #[case(Operation::Or(0), 9, 1)]
    fn combine(#[case] operation: Operation, #[case] acc: Value, #[case] expected: Value) {
        assert_eq!(operation.combine(acc), Ok(expected));
    }

    #[test]
    fn division_by_zero_stops_the_chain() {
        let ops = chain(&[
            (ChainOperator::Add, 1),
            (ChainOperator::Div, 0),
            (ChainOperator::Add, 100),
        ]);

        assert_eq!(ops.apply(4), Err(ValueError::DivisionByZero(5)));
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(Operation::Add(1).combine(Value::MAX), Ok(Value::MIN));
        assert_eq!(Operation::Div(-1).combine(Value::MIN), Ok(Value::MIN));
    }
}
