use super::*;

/// Seconds since the Unix epoch, paired with the UTC calendar time derived
/// from them when the value was decoded.
///
/// Decodes from the bare integer the API sends. Serializes as
/// `{"unix": .., "utc": ..}` so output carries both forms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Timestamp {
  datetime: OffsetDateTime,
  seconds: i64,
}

impl Default for Timestamp {
  fn default() -> Self {
    Self {
      datetime: OffsetDateTime::UNIX_EPOCH,
      seconds: 0,
    }
  }
}

impl<'de> Deserialize<'de> for Timestamp {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let seconds = i64::deserialize(deserializer)?;

    Self::from_unix(seconds).map_err(|_| {
      de::Error::invalid_value(
        Unexpected::Signed(seconds),
        &"a unix timestamp within the supported calendar range",
      )
    })
  }
}

impl Display for Timestamp {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self.datetime.format(&Rfc3339) {
      Ok(formatted) => f.write_str(&formatted),
      Err(_) => write!(f, "{}", self.seconds),
    }
  }
}

impl Serialize for Timestamp {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let utc = self.datetime.format(&Rfc3339).map_err(ser::Error::custom)?;

    let mut state = serializer.serialize_struct("Timestamp", 2)?;
    state.serialize_field("unix", &self.seconds)?;
    state.serialize_field("utc", &utc)?;
    state.end()
  }
}

impl Timestamp {
  #[must_use]
  pub fn datetime(self) -> OffsetDateTime {
    self.datetime
  }

  pub fn from_unix(
    seconds: i64,
  ) -> Result<Self, time::error::ComponentRange> {
    Ok(Self {
      datetime: OffsetDateTime::from_unix_timestamp(seconds)?,
      seconds,
    })
  }

  #[must_use]
  pub fn seconds(self) -> i64 {
    self.seconds
  }
}

#[cfg(test)]
mod tests {
  use {super::*, time::Month};

  #[test]
  fn derives_calendar_time_from_seconds() {
    let timestamp = Timestamp::from_unix(1_173_677_760).unwrap();

    let datetime = timestamp.datetime();

    assert_eq!(datetime.year(), 2007);
    assert_eq!(datetime.month(), Month::March);
    assert_eq!(datetime.day(), 12);
    assert_eq!(datetime.hour(), 5);
    assert_eq!(datetime.minute(), 36);
    assert_eq!(timestamp.seconds(), 1_173_677_760);
  }

  #[test]
  fn displays_as_rfc3339() {
    assert_eq!(
      Timestamp::from_unix(1_173_677_760).unwrap().to_string(),
      "2007-03-12T05:36:00Z"
    );
  }

  #[test]
  fn default_is_the_epoch() {
    assert_eq!(Timestamp::default(), Timestamp::from_unix(0).unwrap());
  }

  #[test]
  fn decodes_from_integer() {
    assert_eq!(
      serde_json::from_str::<Timestamp>("1175714200").unwrap(),
      Timestamp::from_unix(1_175_714_200).unwrap()
    );
  }

  #[test]
  fn serializes_seconds_with_calendar_time() {
    assert_eq!(
      serde_json::to_value(Timestamp::from_unix(1_173_677_760).unwrap())
        .unwrap(),
      serde_json::json!({"unix": 1_173_677_760, "utc": "2007-03-12T05:36:00Z"})
    );
  }

  #[test]
  fn out_of_range_seconds_fail_to_decode() {
    assert!(Timestamp::from_unix(i64::MAX).is_err());
    assert!(serde_json::from_str::<Timestamp>(&i64::MAX.to_string()).is_err());
  }

  #[test]
  fn non_integer_fails_to_decode() {
    assert!(serde_json::from_str::<Timestamp>(r#""yesterday""#).is_err());
  }
}
