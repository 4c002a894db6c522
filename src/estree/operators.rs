//! Операторы выражений и их каноническая запись

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! operator_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Оператор по его записи в исходнике
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Каноническая запись
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

operator_enum! {
    /// Бинарные операторы (`BinaryExpression`)
    BinaryOperator {
        Equal => "==",
        NotEqual => "!=",
        StrictEqual => "===",
        StrictNotEqual => "!==",
        Less => "<",
        LessEqual => "<=",
        Greater => ">",
        GreaterEqual => ">=",
        LeftShift => "<<",
        RightShift => ">>",
        UnsignedRightShift => ">>>",
        Add => "+",
        Subtract => "-",
        Multiply => "*",
        Divide => "/",
        Remainder => "%",
        Exponent => "**",
        BitOr => "|",
        BitXor => "^",
        BitAnd => "&",
        In => "in",
        InstanceOf => "instanceof",
    }
}

operator_enum! {
    /// Логические операторы (`LogicalExpression`)
    LogicalOperator {
        Or => "||",
        And => "&&",
        NullishCoalescing => "??",
    }
}

operator_enum! {
    /// Операторы присваивания, включая составные
    AssignmentOperator {
        Assign => "=",
        AddAssign => "+=",
        SubtractAssign => "-=",
        MultiplyAssign => "*=",
        DivideAssign => "/=",
        RemainderAssign => "%=",
        ExponentAssign => "**=",
        LeftShiftAssign => "<<=",
        RightShiftAssign => ">>=",
        UnsignedRightShiftAssign => ">>>=",
        BitOrAssign => "|=",
        BitXorAssign => "^=",
        BitAndAssign => "&=",
        OrAssign => "||=",
        AndAssign => "&&=",
        NullishAssign => "??=",
    }
}

operator_enum! {
    /// Унарные операторы
    UnaryOperator {
        Minus => "-",
        Plus => "+",
        Not => "!",
        BitNot => "~",
        TypeOf => "typeof",
        Void => "void",
        Delete => "delete",
    }
}

operator_enum! {
    /// Инкремент и декремент
    UpdateOperator {
        Increment => "++",
        Decrement => "--",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_renders_as_keyword() {
        let op = UnaryOperator::from_token("void").unwrap();
        assert_eq!(op, UnaryOperator::Void);
        assert_eq!(op.as_str(), "void");
        assert_eq!(serde_json::to_value(op).unwrap(), serde_json::json!("void"));
    }

    #[test]
    fn test_binary_and_logical_tokens_are_disjoint() {
        for token in ["&&", "||", "??"] {
            assert!(BinaryOperator::from_token(token).is_none());
            assert!(LogicalOperator::from_token(token).is_some());
        }
        assert_eq!(BinaryOperator::from_token("instanceof"), Some(BinaryOperator::InstanceOf));
    }

    #[test]
    fn test_unknown_tokens() {
        assert!(AssignmentOperator::from_token("=>").is_none());
        assert!(UpdateOperator::from_token("+").is_none());
        assert_eq!(AssignmentOperator::UnsignedRightShiftAssign.to_string(), ">>>=");
    }
}
