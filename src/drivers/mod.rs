// Hardware drivers — board-independent beyond the InputHw pin bundle;
// pin assignments live in board/.

pub mod input;
