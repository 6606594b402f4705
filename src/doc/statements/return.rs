/*!
# `return`

## Purpose
Accepted and ignored. A procedure always runs to its `End;`.

*/
