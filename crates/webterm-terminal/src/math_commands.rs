//! Calculator command and its arithmetic evaluator.
//!
//! The evaluator only knows numbers, `+ - * / % **`, unary signs, and
//! parentheses. There are no identifiers, calls, or assignments, so an
//! expression can only produce a number or fail.

use webterm_types::error::{Result, WebTermError};

use crate::interpreter::{Command, CommandRegistry, Environment};

// ---------------------------------------------------------------------------
// calc
// ---------------------------------------------------------------------------

struct CalcCmd;
impl Command for CalcCmd {
    fn name(&self) -> &str {
        "calc"
    }
    fn description(&self) -> &str {
        "Simple calculator"
    }
    fn usage(&self) -> Option<&str> {
        Some("calc <expression>")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let expr_str = args.join(" ");
        if expr_str.is_empty() {
            env.console.write_line("Usage: calc <expression>");
            return Ok(());
        }
        match eval_expr(&expr_str) {
            Ok(val) => env
                .console
                .write_line(&format!("{expr_str} = {}", format_number(val))),
            Err(e) => {
                log::debug!("calc rejected {expr_str:?}: {e}");
                env.console.write_line("Error: Invalid expression");
            },
        }
        Ok(())
    }
}

/// Magnitudes at or above this print in exponent form.
const EXP_FORM_UPPER: f64 = 1e21;
/// Non-zero magnitudes below this print in exponent form.
const EXP_FORM_LOWER: f64 = 1e-6;

/// Shortest round-trip rendering. Whole numbers have no fractional part;
/// very large and very small magnitudes use `<mantissa>e<+|-><exp>`.
fn format_number(val: f64) -> String {
    if val == 0.0 {
        return "0".to_string();
    }
    let mag = val.abs();
    if mag >= EXP_FORM_UPPER || mag < EXP_FORM_LOWER {
        let s = format!("{val:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else {
        format!("{val}")
    }
}

/// Register the calculator.
pub fn register_math_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(CalcCmd));
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Maximum nesting depth for parentheses, unary signs, and powers.
const EXPR_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    LParen,
    RParen,
}

/// Evaluate an arithmetic expression.
///
/// Fails on anything that is not arithmetic, on division or remainder by
/// zero, and on results that are not finite.
pub fn eval_expr(input: &str) -> Result<f64> {
    let tokens = tokenize_expr(input)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let result = parser.parse_sum(0)?;
    if let Some(tok) = parser.peek() {
        return Err(expr_error(format!("unexpected token: {tok:?}")));
    }
    if !result.is_finite() {
        return Err(expr_error("result is not finite"));
    }
    Ok(result)
}

fn expr_error(msg: impl Into<String>) -> WebTermError {
    WebTermError::Expression(msg.into())
}

fn tokenize_expr(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            },
            c if c.is_ascii_digit() || c == '.' => {
                let mut num = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        num.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                // Exponent suffix: 1e3, 2.5E-4
                if let Some(&e) = chars.peek() {
                    if e == 'e' || e == 'E' {
                        num.push(e);
                        chars.next();
                        if let Some(&sign) = chars.peek() {
                            if sign == '+' || sign == '-' {
                                num.push(sign);
                                chars.next();
                            }
                        }
                        while let Some(&c) = chars.peek() {
                            if c.is_ascii_digit() {
                                num.push(c);
                                chars.next();
                            } else {
                                break;
                            }
                        }
                    }
                }
                let val: f64 = num
                    .parse()
                    .map_err(|_| expr_error(format!("malformed number: {num}")))?;
                tokens.push(Token::Num(val));
            },
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            },
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            },
            '*' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push(Token::Power);
                } else {
                    tokens.push(Token::Star);
                }
            },
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            },
            '%' => {
                chars.next();
                tokens.push(Token::Percent);
            },
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            },
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            },
            _ => return Err(expr_error(format!("unexpected character: {ch}"))),
        }
    }
    Ok(tokens)
}

/// Recursive-descent parser that evaluates as it goes.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn parse_sum(&mut self, depth: usize) -> Result<f64> {
        let mut left = self.parse_product(depth)?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let right = self.parse_product(depth)?;
            if op == Token::Plus {
                left += right;
            } else {
                left -= right;
            }
        }
        Ok(left)
    }

    fn parse_product(&mut self, depth: usize) -> Result<f64> {
        let mut left = self.parse_unary(depth)?;
        while let Some(op @ (Token::Star | Token::Slash | Token::Percent)) = self.peek() {
            self.pos += 1;
            let right = self.parse_unary(depth)?;
            match op {
                Token::Star => left *= right,
                Token::Slash => {
                    if right == 0.0 {
                        return Err(expr_error("division by zero"));
                    }
                    left /= right;
                },
                _ => {
                    if right == 0.0 {
                        return Err(expr_error("division by zero"));
                    }
                    left %= right;
                },
            }
        }
        Ok(left)
    }

    fn parse_unary(&mut self, depth: usize) -> Result<f64> {
        if depth >= EXPR_MAX_DEPTH {
            return Err(expr_error("expression too deeply nested"));
        }
        let negate = match self.peek() {
            Some(Token::Minus) => true,
            Some(Token::Plus) => false,
            _ => return self.parse_power(depth),
        };
        self.pos += 1;
        let operand = match self.peek() {
            Some(Token::Minus | Token::Plus) => self.parse_unary(depth + 1)?,
            _ => self.parse_primary(depth)?,
        };
        // `-2 ** 2` is ambiguous; the operand must be parenthesised.
        if self.peek() == Some(Token::Power) {
            return Err(expr_error("unary operator before '**'"));
        }
        Ok(if negate { -operand } else { operand })
    }

    fn parse_power(&mut self, depth: usize) -> Result<f64> {
        let base = self.parse_primary(depth)?;
        if self.peek() == Some(Token::Power) {
            self.pos += 1;
            let exponent = self.parse_unary(depth + 1)?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self, depth: usize) -> Result<f64> {
        match self.advance() {
            Some(Token::Num(val)) => Ok(val),
            Some(Token::LParen) => {
                if depth >= EXPR_MAX_DEPTH {
                    return Err(expr_error("expression too deeply nested"));
                }
                let val = self.parse_sum(depth + 1)?;
                match self.advance() {
                    Some(Token::RParen) => Ok(val),
                    _ => Err(expr_error("missing closing parenthesis")),
                }
            },
            Some(tok) => Err(expr_error(format!("expected number, got {tok:?}"))),
            None => Err(expr_error("unexpected end of expression")),
        }
    }
}
