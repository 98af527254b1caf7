#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:literal, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    state: web::Data<AppState>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](state, info).await {
                        Ok(response) => response,
                        Err(err) => {
                            log::warn!("{} rejected: {:#}", stringify!($func_name), err);
                            <$response>::err(&err)
                        }
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use chrono::{DateTime, NaiveDate, Utc};

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_time_str(time: &DateTime<Utc>) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    format!("{}+00:00", time.format(TIME_FMT))
}

pub fn parse_status_filter<T>(
    status: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
) -> anyhow::Result<Option<T>> {
    match status.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(s) => match parse(s) {
            Some(status) => Ok(Some(status)),
            None => Err(crate::error::DomainError::Validation(format!(
                "Unknown status '{}'",
                s
            ))
            .into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_timestamps_like_the_rest_of_the_api() {
        let time = Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0).unwrap();
        assert_eq!(format_time_str(&time), "2025-12-01T09:30:00+00:00");
    }

    #[test]
    fn status_filter_accepts_all() {
        let parse = |s: &str| if s == "x" { Some(1) } else { None };
        assert_eq!(parse_status_filter(None, parse).unwrap(), None);
        assert_eq!(parse_status_filter(Some("all".into()), parse).unwrap(), None);
        assert_eq!(parse_status_filter(Some("x".into()), parse).unwrap(), Some(1));
        assert!(parse_status_filter(Some("y".into()), parse).is_err());
    }
}
