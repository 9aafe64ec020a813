//! Fluent methods: each returns `&mut Self` so calls chain.

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub last_name: String,
    pub age: u32,
    said: Vec<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            last_name: last_name.into(),
            age,
            said: Vec::new(),
        }
    }

    pub fn speak(&mut self) -> &mut Self {
        let line = format!("{} is speaking (age {})", self.name, self.age);
        self.said.push(line);
        self
    }

    pub fn birthday(&mut self) -> &mut Self {
        self.age += 1;
        self
    }

    /// Every line `speak` has produced so far, oldest first.
    pub fn transcript(&self) -> &[String] {
        &self.said
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_speak_birthday_speak() {
        let mut person = Person::new("João", "Justino", 21);
        person.speak().birthday().speak();

        assert_eq!(person.age, 22);
        assert_eq!(
            person.transcript(),
            ["João is speaking (age 21)", "João is speaking (age 22)"]
        );
    }

    #[test]
    fn test_transcript_starts_empty_and_birthday_adds_nothing() {
        let mut person = Person::new("Ana", "Lima", 30);
        assert!(person.transcript().is_empty());
        person.birthday().birthday();
        assert!(person.transcript().is_empty());
        assert_eq!(person.speak().transcript(), ["Ana is speaking (age 32)"]);
    }
}
