/*!
A simple CLI interface to the library.

# Use

```sh
hornlog_cli file.pl
```

The program is loaded from the given file, and queries are then read line by line from stdin, each answered in turn:

```none
?- parent(X, Y).
true.
X = pesho, Y = gosho
```

`halt.` ends the session.
No options are supported --- the binary is a thin frontend over the library, and configuration belongs to code which embeds the [Context](hornlog::context::Context) directly.
*/

use std::io::{BufRead, Write};

use hornlog::config::Config;
use hornlog::context::Context;
use hornlog::reports::Report;

/// Entrypoint to the CLI.
fn main() {
    let args: Vec<String> = std::env::args().collect();

    let path = match args.as_slice() {
        [_, path] => path,
        _ => {
            eprintln!("Usage: hornlog_cli <program.pl>");
            std::process::exit(1);
        }
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    };

    let mut ctx = Context::from_config(Config::default());

    if let Err(e) = ctx.load_program(&source) {
        println!("{}", Report::KnowledgeBase(e));
        std::process::exit(1);
    }

    let stdin = std::io::stdin();
    prompt();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        let query = line.trim();

        if query.is_empty() {
            prompt();
            continue;
        }

        if query == "halt." {
            break;
        }

        println!("{}", ctx.answer(query));
        prompt();
    }
}

fn prompt() {
    print!("?- ");
    let _ = std::io::stdout().flush();
}
