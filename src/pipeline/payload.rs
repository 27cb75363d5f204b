use crate::foundation::error::{QrStyleError, QrStyleResult};

/// Structured QR payloads and the string formats scanners understand.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
    /// Website address, encoded verbatim.
    Url {
        /// The URL.
        text: String,
    },
    /// Free text, encoded verbatim.
    Text {
        /// The text.
        text: String,
    },
    /// WiFi network credentials.
    Wifi {
        /// Network name.
        ssid: String,
        /// Network password; ignored for `nopass`.
        #[serde(default)]
        password: String,
        /// `WPA`, `WEP` or `nopass`.
        #[serde(default = "default_wifi_security")]
        security: String,
    },
    /// vCard 3.0 contact.
    Contact {
        /// Full name.
        name: String,
        /// Phone number.
        #[serde(default)]
        phone: Option<String>,
        /// Email address.
        #[serde(default)]
        email: Option<String>,
        /// Organization.
        #[serde(default)]
        company: Option<String>,
    },
    /// `mailto:` link.
    Email {
        /// Recipient address.
        to: String,
        /// Subject line.
        #[serde(default)]
        subject: Option<String>,
        /// Message body.
        #[serde(default)]
        body: Option<String>,
    },
    /// `sms:` link.
    Sms {
        /// Recipient number.
        phone: String,
        /// Message text.
        #[serde(default)]
        message: Option<String>,
    },
    /// `tel:` link.
    Phone {
        /// Number to dial.
        number: String,
    },
    /// `geo:` location.
    Location {
        /// Latitude, as entered.
        lat: String,
        /// Longitude, as entered.
        lng: String,
        /// Optional place name.
        #[serde(default)]
        name: Option<String>,
    },
}

fn default_wifi_security() -> String {
    "WPA".to_string()
}

impl Payload {
    /// Render the payload string to encode.
    ///
    /// Fields are trimmed; a required field that is empty after trimming is an
    /// [`QrStyleError::InvalidParameter`].
    pub fn to_qr_string(&self) -> QrStyleResult<String> {
        match self {
            Payload::Url { text } => required(text, "Please enter a website URL."),
            Payload::Text { text } => required(text, "Please enter text content."),
            Payload::Wifi {
                ssid,
                password,
                security,
            } => {
                let ssid = required(ssid, "Please enter WiFi network name.")?;
                let security = security.trim();
                if security == "nopass" {
                    Ok(format!("WIFI:T:nopass;S:{ssid};;"))
                } else {
                    let password = password.trim();
                    Ok(format!("WIFI:T:{security};S:{ssid};P:{password};H:false;;"))
                }
            }
            Payload::Contact {
                name,
                phone,
                email,
                company,
            } => {
                let name = required(name, "Please enter contact name.")?;
                let mut vcard = String::from("BEGIN:VCARD\nVERSION:3.0\n");
                vcard.push_str(&format!("FN:{name}\n"));
                for (tag, value) in [("TEL", phone), ("EMAIL", email), ("ORG", company)] {
                    if let Some(v) = optional(value) {
                        vcard.push_str(&format!("{tag}:{v}\n"));
                    }
                }
                vcard.push_str("END:VCARD");
                Ok(vcard)
            }
            Payload::Email { to, subject, body } => {
                let to = required(to, "Please enter recipient email.")?;
                let params: Vec<String> = [("subject", subject), ("body", body)]
                    .into_iter()
                    .filter_map(|(k, v)| optional(v).map(|v| format!("{k}={v}")))
                    .collect();
                if params.is_empty() {
                    Ok(format!("mailto:{to}"))
                } else {
                    Ok(format!("mailto:{to}?{}", params.join("&")))
                }
            }
            Payload::Sms { phone, message } => {
                let phone = required(phone, "Please enter phone number.")?;
                match optional(message) {
                    Some(m) => Ok(format!("sms:{phone}:{m}")),
                    None => Ok(format!("sms:{phone}")),
                }
            }
            Payload::Phone { number } => {
                let number = required(number, "Please enter phone number.")?;
                Ok(format!("tel:{number}"))
            }
            Payload::Location { lat, lng, name } => {
                let msg = "Please enter both latitude and longitude.";
                let lat = required(lat, msg)?;
                let lng = required(lng, msg)?;
                match optional(name) {
                    Some(n) => Ok(format!("geo:{lat},{lng}?q={n}")),
                    None => Ok(format!("geo:{lat},{lng}")),
                }
            }
        }
    }
}

fn required(value: &str, msg: &str) -> QrStyleResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(QrStyleError::invalid_parameter(msg));
    }
    Ok(v.to_string())
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/payload.rs"]
mod tests;
