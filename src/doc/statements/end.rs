/*!
# `End;`

## Purpose
Close a block. The `End;` that closes the main container ends the
program; nothing after it runs.

*/
