//! Shell-init command.
//!
//! A standalone process cannot set variables in the shell that started it.
//! This prints a `keypick` shell function that runs the binary and evaluates
//! the `export` line it prints for `export` and `pick`; every other
//! subcommand passes straight through. The fish function sets
//! `KEYPICK_SHELL=fish` so the binary prints `set -gx` lines quoted for fish.

use crate::cli::{output, InitShell};
use crate::error::Result;

const POSIX: &str = r#"keypick() {
    case "$1" in
        export|pick)
            local __keypick_out
            __keypick_out="$(command keypick "$@")" || return $?
            [ -n "$__keypick_out" ] && eval "$__keypick_out"
            ;;
        *)
            command keypick "$@"
            ;;
    esac
}"#;

const FISH: &str = r#"function keypick
    switch "$argv[1]"
        case export pick
            set -l __keypick_out (KEYPICK_SHELL=fish command keypick $argv | string collect)
            test -n "$__keypick_out"; and eval $__keypick_out
        case '*'
            command keypick $argv
    end
end"#;

/// Shell function source for `shell`.
pub fn script(shell: InitShell) -> &'static str {
    match shell {
        InitShell::Bash | InitShell::Zsh => POSIX,
        InitShell::Fish => FISH,
    }
}

/// Print the shell function.
pub fn execute(shell: InitShell) -> Result<()> {
    output::data(script(shell));
    Ok(())
}
