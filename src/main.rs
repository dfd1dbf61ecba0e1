use std::io;
use std::io::BufRead;
use std::io::Write;

use anyhow::{Context, Result};
use matrix_tool::ops::OPERATIONS;
use matrix_tool::{apply, parse_matrix, Evaluation, Matrix, Operation};

const FRAME_WIDTH: usize = 50;

fn main() {
    if let Err(error) = run() {
        eprintln!("\nAn unexpected fatal error occurred: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut input = io::stdin().lock();

    println!("\n{}", "#".repeat(FRAME_WIDTH));
    println!("      MATRIX OPERATIONS TOOL");
    println!("{}", "#".repeat(FRAME_WIDTH));

    loop {
        println!("\nSelect an operation to perform:");
        for op in OPERATIONS {
            println!(" [{}] {}", op.choice(), op.label());
        }
        println!(" [0] Exit");

        // EOF ends the session like an explicit exit
        let Some(choice) = prompt(&mut input, "Enter your choice (0-5): ")? else {
            break;
        };

        if choice == "0" {
            println!("\nThank you for using the Matrix Operations Tool. Goodbye!");
            break;
        }

        match Operation::from_choice(&choice) {
            Some(op) => {
                if !perform(op, &mut input)? {
                    break;
                }
            }
            None => println!("\nInvalid choice. Please enter a number from 0 to 5."),
        }
    }

    Ok(())
}

/// Run one operation end to end. Returns false when stdin closed mid-prompt.
fn perform(op: Operation, input: &mut impl BufRead) -> Result<bool> {
    let two_matrices = op.arity() == 2;

    let first_prompt = if two_matrices {
        "Enter Matrix A"
    } else {
        "Enter the Matrix"
    };
    let Some(a) = read_matrix(input, first_prompt)? else {
        return Ok(false);
    };
    display_matrix(if two_matrices { "Matrix A" } else { "Input Matrix" }, &a);

    let b = if two_matrices {
        let Some(b) = read_matrix(input, "Enter Matrix B")? else {
            return Ok(false);
        };
        display_matrix("Matrix B", &b);
        Some(b)
    } else {
        None
    };

    match apply(op, &a, b.as_ref()) {
        Ok(Evaluation::Matrix(result)) => display_matrix(op.label(), &result),
        Ok(Evaluation::Scalar(det)) => {
            println!("\n{}", "=".repeat(FRAME_WIDTH));
            println!("RESULT: Determinant");
            println!("{}", "-".repeat(FRAME_WIDTH));
            println!("Determinant of the matrix is: {det:.4}");
            println!("{}", "=".repeat(FRAME_WIDTH));
        }
        Err(error) => println!("\n!!! ERROR: {error}"),
    }

    Ok(true)
}

/// Prompt until the line parses as a matrix. Ok(None) means stdin closed.
fn read_matrix(input: &mut impl BufRead, prompt_text: &str) -> Result<Option<Matrix<f64>>> {
    loop {
        let Some(line) = prompt(input, &format!("\n{prompt_text} (e.g., '1 2; 3 4'): "))? else {
            return Ok(None);
        };

        match parse_matrix::<f64>(&line) {
            Ok(matrix) => {
                println!("\nInput Matrix successfully parsed. Shape: {:?}", matrix.shape());
                return Ok(Some(matrix));
            }
            Err(error) => println!("Input Error: {error} Please try again."),
        }
    }
}

fn display_matrix(title: &str, matrix: &Matrix<f64>) {
    println!("\n{}", "=".repeat(FRAME_WIDTH));
    println!("RESULT: {title}");
    println!("Shape: {:?}", matrix.shape());
    println!("{}", "-".repeat(FRAME_WIDTH));
    println!("{matrix}");
    println!("{}", "=".repeat(FRAME_WIDTH));
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
