//! Interactive field-by-field data collection
//!
//! Each field loops until the input passes its validation rule, echoing
//! the normalized form back to the operator.

use formatter_engine::Formatter;
use owo_colors::OwoColorize;
use shared_types::PersonRecord;
use std::io::{self, BufRead, Write};

/// Marital-status menu, in display order. Keys feed the formatter in
/// their base masculine form; gender agreement happens there.
const MARITAL_OPTIONS: &[(&str, &str, &str)] = &[
    ("1", "Solteiro(a)", "solteiro"),
    ("2", "Casado(a)", "casado"),
    ("3", "Divorciado(a)", "divorciado"),
    ("4", "Viúvo(a)", "viúvo"),
    ("5", "Separado(a)", "separado"),
];

fn prompt(label: &str) -> io::Result<String> {
    print!("{} ", label);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn collect_record(
    formatter: &Formatter,
    date_override: Option<&str>,
) -> io::Result<PersonRecord> {
    println!("\n{}", "DADOS PESSOAIS".bold());

    let full_name = loop {
        let raw = prompt("Nome completo:")?;
        if raw.is_empty() {
            println!("{}", "Nome é obrigatório.".red());
            continue;
        }
        break formatter.format_full_name(&raw);
    };
    let gender = formatter.infer_gender(&full_name);

    let national_id = loop {
        let raw = prompt("CPF (qualquer formato):")?;
        if raw.is_empty() {
            println!("{}", "CPF é obrigatório.".red());
            continue;
        }
        let formatted = formatter.format_cpf(&raw);
        if digit_count(&formatted) == 11 {
            println!("   CPF formatado: {}", formatted.green());
            break formatted;
        }
        println!("{}", "CPF inválido. Digite 11 números.".red());
    };

    println!("\n{}", "ENDEREÇO".bold());
    let street_address = loop {
        let raw = prompt("Endereço completo (ex: Av. Paulista, 123, apto 101):")?;
        if raw.is_empty() {
            println!("{}", "Endereço é obrigatório.".red());
            continue;
        }
        let formatted = formatter.format_address(&raw);
        println!("   Endereço formatado: {}", formatted.green());
        break formatted;
    };

    let city = loop {
        let raw = prompt("Cidade:")?;
        if raw.is_empty() {
            println!("{}", "Cidade é obrigatória.".red());
            continue;
        }
        let formatted = formatter.format_city(&raw);
        println!("   Cidade formatada: {}", formatted.green());
        break formatted;
    };

    let state_code = collect_state_code(formatter, "Estado (sigla, ex: SP):")?;

    println!("\n{}", "DADOS PROFISSIONAIS".bold());
    let bar_number = loop {
        let raw = prompt("Número da OAB (6 dígitos):")?;
        if raw.is_empty() {
            println!("{}", "Número da OAB é obrigatório.".red());
            continue;
        }
        let formatted = formatter.format_oab(&raw);
        if digit_count(&formatted) == 6 {
            println!("   OAB formatada: {}", formatted.green());
            break formatted;
        }
        println!("{}", "Número da OAB deve ter 6 dígitos.".red());
    };
    let bar_state_code = collect_state_code(formatter, "UF da OAB (sigla):")?;

    println!("\n{}", "ESTADO CIVIL".bold());
    for (key, label, _) in MARITAL_OPTIONS {
        println!("{} - {}", key, label);
    }
    let marital_status = loop {
        let raw = prompt("Escolha uma opção (1-5):")?;
        match MARITAL_OPTIONS.iter().find(|(key, _, _)| *key == raw) {
            Some((_, _, status)) => {
                let formatted = formatter.format_marital_status(status, gender);
                println!("   Estado civil: {}", formatted.green());
                break formatted;
            }
            None => println!("{}", "Opção inválida. Escolha de 1 a 5.".red()),
        }
    };

    println!("\n{}", "DATA".bold());
    let raw_date = match date_override {
        Some(date) => date.to_string(),
        None => prompt("Data (DD/MM/AAAA, Enter para hoje):")?,
    };
    let formatted_date = formatter.format_signing_date(&raw_date);
    if formatted_date.defaulted && !raw_date.trim().is_empty() {
        println!("{}", "Data não reconhecida; usando a data atual.".yellow());
    }
    println!("   Data formatada: {}", formatted_date.text.green());

    Ok(PersonRecord {
        full_name,
        national_id,
        street_address,
        city,
        state_code,
        bar_number,
        bar_state_code,
        marital_status,
        nationality: gender.pick("brasileiro", "brasileira").to_string(),
        profession: gender.pick("advogado", "advogada").to_string(),
        signing_date: formatted_date.text,
        gender,
    })
}

fn collect_state_code(formatter: &Formatter, label: &str) -> io::Result<String> {
    loop {
        let raw = prompt(label)?;
        let formatted = formatter.format_state_code(&raw);
        if formatter.tables().is_state_code(&formatted) {
            return Ok(formatted);
        }
        println!(
            "{} Use: {}",
            "Sigla de estado inválida.".red(),
            formatter.tables().state_codes().join(", ")
        );
    }
}

pub fn show_summary(record: &PersonRecord) {
    println!("\n{}", "RESUMO DOS DADOS".bold());
    println!("{}", "-".repeat(60));
    println!("{:<20}: {}", "Nome completo", record.full_name);
    println!("{:<20}: {}", "CPF", record.national_id);
    println!("{:<20}: {}", "Endereço", record.street_address);
    println!(
        "{:<20}: {}/{}",
        "Cidade/Estado", record.city, record.state_code
    );
    println!(
        "{:<20}: {} {}",
        "OAB", record.bar_state_code, record.bar_number
    );
    println!("{:<20}: {}", "Estado civil", record.marital_status);
    println!("{:<20}: {}", "Data", record.signing_date);
    println!("{}", "-".repeat(60));
}

pub fn confirm(label: &str) -> io::Result<bool> {
    let answer = prompt(label)?;
    Ok(answer.eq_ignore_ascii_case("s"))
}
