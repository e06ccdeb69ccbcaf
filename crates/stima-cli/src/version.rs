use std::io::{self, Write};

const COPYRIGHT: &str = concat!("Copyright (c) ", env!("CARGO_PKG_AUTHORS"));
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Print the one-line version banner
pub fn print<W: Write>(w: &mut W, binary: &str) -> io::Result<()> {
    write!(
        w,
        "\n  {} v{}.{}.{} ({}/{}) - {} - {}\n\n",
        binary,
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        COPYRIGHT,
        DESCRIPTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        let mut buf = Vec::new();
        print(&mut buf, "stima").unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with(&format!("\n  stima v{} (", env!("CARGO_PKG_VERSION"))));
        assert!(out.contains(std::env::consts::OS));
        assert!(out.contains(DESCRIPTION));
        assert!(out.ends_with("\n\n"));
    }
}
