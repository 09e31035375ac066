/// Calendar units, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// Display language for every user-facing time phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Accepts "fr"/"en" in any case, plus the long names.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "fr" | "french" | "francais" | "français" => Some(Locale::Fr),
            "en" | "english" => Some(Locale::En),
            _ => None,
        }
    }

    /// Name stored when an event is created without one.
    pub fn placeholder_name(&self) -> &'static str {
        match self {
            Locale::Fr => "Non renseigné",
            Locale::En => "Untitled",
        }
    }

    pub fn just_now(&self) -> &'static str {
        match self {
            Locale::Fr => "À l'instant",
            Locale::En => "just now",
        }
    }

    /// "il y a 3 jours" / "3 days ago"
    pub fn ago(&self, unit: TimeUnit, count: i64) -> String {
        match self {
            Locale::Fr => format!("il y a {} {}", count, self.unit_word(unit, count)),
            Locale::En => format!("{} {} ago", count, self.unit_word(unit, count)),
        }
    }

    pub fn unit_word(&self, unit: TimeUnit, count: i64) -> &'static str {
        let one = count == 1;
        match (self, unit) {
            (Locale::Fr, TimeUnit::Year) => pick(one, "an", "ans"),
            (Locale::Fr, TimeUnit::Month) => "mois",
            (Locale::Fr, TimeUnit::Week) => pick(one, "semaine", "semaines"),
            (Locale::Fr, TimeUnit::Day) => pick(one, "jour", "jours"),
            (Locale::Fr, TimeUnit::Hour) => pick(one, "heure", "heures"),
            (Locale::Fr, TimeUnit::Minute) => pick(one, "minute", "minutes"),
            (Locale::Fr, TimeUnit::Second) => pick(one, "seconde", "secondes"),
            (Locale::En, TimeUnit::Year) => pick(one, "year", "years"),
            (Locale::En, TimeUnit::Month) => pick(one, "month", "months"),
            (Locale::En, TimeUnit::Week) => pick(one, "week", "weeks"),
            (Locale::En, TimeUnit::Day) => pick(one, "day", "days"),
            (Locale::En, TimeUnit::Hour) => pick(one, "hour", "hours"),
            (Locale::En, TimeUnit::Minute) => pick(one, "minute", "minutes"),
            (Locale::En, TimeUnit::Second) => pick(one, "second", "seconds"),
        }
    }

    /// Capitalised label under a counter cell ("Jours", "Hours", ...).
    pub fn counter_label(&self, unit: TimeUnit, count: i64) -> String {
        let word = self.unit_word(unit, count);
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Heading above the event date in the detail view.
    pub fn direction_label(&self, in_future: bool) -> &'static str {
        match (self, in_future) {
            (Locale::Fr, false) => "Depuis le",
            (Locale::Fr, true) => "Jusqu'au",
            (Locale::En, false) => "Since",
            (Locale::En, true) => "Until",
        }
    }
}

fn pick(one: bool, singular: &'static str, plural: &'static str) -> &'static str {
    if one { singular } else { plural }
}
