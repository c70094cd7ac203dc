//! Command-line sub-command dispatch.
//!
//! Each command maps straight onto the text API and returns the lines to
//! print, so `main` stays a thin shell.

use crate::bulk::{extract_addresses, resolve_client_ip, sanitize_patterns, statistics};
use crate::config::Config;
use crate::output::{format_bool, format_line, format_option};
use crate::{
    anonymize, broadcast_address, from_decimal, is_anonymized, is_in_range, is_private,
    is_valid, is_valid_ipv4, mask_display, matches, network_address, to_decimal,
    usable_address_count,
};
use std::collections::HashMap;
use std::error::Error;

pub const USAGE: &str = "usage: ip-range-kit <command> [args]
  check <ip>                  validity, family and private/public
  range <ip> <cidr>           membership test
  cidr <cidr>                 network, broadcast and usable hosts
  match <ip> [patterns..]     exact/CIDR/wildcard list match
  anon <ip>                   anonymize the last segment
  mask <ip>                   mask the last segment for display
  decimal <ip>                decimal integer value
  from-decimal <n> [--v6]     address for a decimal value
  extract <text>              addresses found in text
  sanitize <text>             clean a newline separated pattern list
  stats <ip..>                counts of valid/invalid, family, private/public as JSON
  client KEY=VALUE..          resolve client address from request metadata";

const WIDTH: usize = 12;

fn arg<'a>(args: &'a [String], i: usize, name: &str) -> Result<&'a str, Box<dyn Error>> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("missing argument <{name}>\n{USAGE}").into())
}

/// Run one command. `args` excludes the program name.
pub fn run(args: &[String], config: &Config) -> Result<Vec<String>, Box<dyn Error>> {
    let command = arg(args, 0, "command")?;
    log::debug!("run({command}) args={:?}", &args[1..]);
    let color = config.color;

    let lines = match command {
        "check" => {
            let ip = arg(args, 1, "ip")?;
            let valid = is_valid(ip);
            let family = match (valid, is_valid_ipv4(ip)) {
                (false, _) => "-",
                (true, true) => "IPv4",
                (true, false) => "IPv6",
            };
            vec![
                format_line("valid:", &format_bool(valid, color), WIDTH),
                format_line("family:", family, WIDTH),
                format_line("private:", &format_bool(is_private(ip), color), WIDTH),
                format_line("anonymized:", &format_bool(is_anonymized(ip), color), WIDTH),
            ]
        }
        "range" => {
            let ip = arg(args, 1, "ip")?;
            let cidr = arg(args, 2, "cidr")?;
            vec![format_bool(is_in_range(ip, cidr), color)]
        }
        "cidr" => {
            let cidr = arg(args, 1, "cidr")?;
            let network = network_address(cidr);
            if network.is_empty() {
                return Err(format!("invalid CIDR: {cidr}").into());
            }
            let broadcast = broadcast_address(cidr);
            vec![
                format_line("network:", &network, WIDTH),
                format_line("broadcast:", &format_option(Some(broadcast.as_str()), color), WIDTH),
                format_line("usable:", &usable_address_count(cidr).to_string(), WIDTH),
            ]
        }
        "match" => {
            let ip = arg(args, 1, "ip")?;
            let patterns: Vec<String> = if args.len() > 2 {
                args[2..].to_vec()
            } else {
                config.patterns.clone()
            };
            if patterns.is_empty() {
                log::warn!("no patterns given and none configured");
            }
            vec![format_bool(matches(ip, &patterns), color)]
        }
        "anon" => vec![format_option(anonymize(arg(args, 1, "ip")?).as_deref(), color)],
        "mask" => vec![format_option(mask_display(arg(args, 1, "ip")?).as_deref(), color)],
        "decimal" => vec![format_option(Some(to_decimal(arg(args, 1, "ip")?).as_str()), color)],
        "from-decimal" => {
            let n = arg(args, 1, "n")?;
            let v6 = args.iter().skip(2).any(|a| a == "--v6");
            vec![format_option(Some(from_decimal(n, v6).as_str()), color)]
        }
        "extract" => extract_addresses(&args[1..].join(" ")),
        "sanitize" => sanitize_patterns(args[1..].join("\n")),
        "stats" => {
            let stats = statistics(&args[1..]);
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            json.lines().map(str::to_string).collect()
        }
        "client" => {
            let meta: HashMap<String, String> = args[1..]
                .iter()
                .filter_map(|kv| kv.split_once('='))
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            vec![format_option(
                resolve_client_ip(&meta, &config.headers).as_deref(),
                color,
            )]
        }
        "help" | "--help" | "-h" => vec![USAGE.to_string()],
        other => return Err(format!("unknown command: {other}\n{USAGE}").into()),
    };
    Ok(lines)
}
