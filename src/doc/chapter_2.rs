/*!
# Statements
*/

#[path = "statements/def.rs"]
#[allow(non_snake_case)]
pub mod DEF;

#[path = "statements/console_type.rs"]
#[allow(non_snake_case)]
pub mod CONSOLE_TYPE;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;

#[path = "statements/break.rs"]
#[allow(non_snake_case)]
pub mod BREAK;

#[path = "statements/procedure.rs"]
#[allow(non_snake_case)]
pub mod PROCEDURE;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;
