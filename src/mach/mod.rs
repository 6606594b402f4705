/*!
## Rust Machine Module

This Rust module runs programs: the value model and its arithmetic, the
variable, list and procedure stores, and the executor that walks the
preprocessed lines.

*/

mod config;
mod evaluate;
mod function;
mod input;
mod list;
mod operation;
mod procedure;
mod runtime;
mod stack;
mod val;
mod var;

pub use config::Config;
pub use evaluate::Evaluator;
pub use function::Function;
pub use input::Input;
pub use list::Lists;
pub use operation::Operation;
pub use procedure::Procedures;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;
