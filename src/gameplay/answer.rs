/// Reply to the play-again prompt.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// str isomorphism
impl TryFrom<&str> for Answer {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "s" | "si" | "sí" | "y" | "yes" => Ok(Answer::Yes),
            "n" | "no" => Ok(Answer::No),
            _ => Err(String::from("Opción inválida. Responde s o n")),
        }
    }
}
