use std::{env, fs::read_to_string, process::exit, time::Instant};

use tinyscript::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: tinyscript <srcfile>");
        exit(2);
    }

    let file_path = &args[1];
    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, file_path);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());
    for token in &tokens {
        token.debug();
    }

    let parse_start = Instant::now();

    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &source, file_path);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("{}", ast);
    print!("{}", ast.tree_string());
}
