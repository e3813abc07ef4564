use crate::evaluator::Operator;
use crate::values::{Cells, ErrorKind, Expr};

/// Apply `op` to two operands.
///
/// An error operand is returned unchanged (the left one first). Otherwise
/// the operator must be recognized and both operands must be numbers.
pub fn apply(op: &str, left: Expr, right: Expr) -> Expr {
    if left.is_error() {
        return left;
    }
    if right.is_error() {
        return right;
    }
    match op.parse::<Operator>() {
        Ok(operator) => combine(operator, left, right),
        Err(kind) => kind.into(),
    }
}

fn combine(operator: Operator, left: Expr, right: Expr) -> Expr {
    match (left, right) {
        (err @ Expr::Error(_), _) | (_, err @ Expr::Error(_)) => err,
        (Expr::Number(x), Expr::Number(y)) => match operator.apply(x, y) {
            Ok(value) => Expr::Number(value),
            Err(kind) => kind.into(),
        },
        _ => ErrorKind::TypeMismatch.into(),
    }
}

/// Reduces expressions to values.
///
/// Holds no state between calls to [`Evaluator::eval`]; the depth counter
/// always returns to zero.
pub struct Evaluator {
    max_depth: usize,
    depth: usize,
}

impl Evaluator {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
        }
    }

    /// Evaluate `expr`, consuming it.
    ///
    /// Only S-expressions reduce; every other variant, including
    /// Q-expressions and their contents, is already a value.
    pub fn eval(&mut self, expr: Expr) -> Expr {
        match expr {
            Expr::SExpr(cells) => {
                if self.depth >= self.max_depth {
                    return ErrorKind::DepthExceeded {
                        max_depth: self.max_depth,
                    }
                    .into();
                }
                self.depth += 1;
                let result = self.eval_sexpr(cells);
                self.depth -= 1;
                result
            }
            other => other,
        }
    }

    fn eval_sexpr(&mut self, cells: Cells) -> Expr {
        let mut values = Vec::with_capacity(cells.len());
        for cell in cells {
            let value = self.eval(cell);
            if value.is_error() {
                return value;
            }
            values.push(value);
        }

        let mut values = values.into_iter();
        let head = match values.next() {
            Some(head) => head,
            None => return Expr::sexpr(),
        };
        let first = match values.next() {
            Some(first) => first,
            None => return head,
        };

        match head {
            Expr::Symbol(op) => fold(&op, first, values.collect()),
            _ => ErrorKind::NotAnOperator.into(),
        }
    }
}

/// Left-fold `op` over `first` and `rest`, stopping at the first error.
fn fold(op: &str, first: Expr, rest: Vec<Expr>) -> Expr {
    let operator = match op.parse::<Operator>() {
        Ok(operator) => operator,
        Err(kind) => return kind.into(),
    };
    let numbers = rest.iter().map(Expr::as_number).collect::<Option<Vec<f64>>>();
    let (Some(first), Some(rest)) = (first.as_number(), numbers) else {
        return ErrorKind::TypeMismatch.into();
    };

    tracing::trace!(op, operands = rest.len() + 1, "folding");

    if rest.is_empty() {
        return Expr::Number(operator.apply_unary(first));
    }
    match rest.into_iter().try_fold(first, |acc, x| operator.apply(acc, x)) {
        Ok(value) => Expr::Number(value),
        Err(kind) => kind.into(),
    }
}
