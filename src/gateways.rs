use crate::config;
use dcf_gateways::opencage::OpenCage;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Option<OpenCage> {
    let config::Geocoding {
        gateway,
        proximity,
        request_timeout,
    } = cfg;
    match gateway {
        Some(config::GeocodingGateway::OpenCage {
            api_key,
            api_base_url,
            country_code,
        }) => {
            log::info!("Use OpenCage geocoding gateway");
            let mut gw = OpenCage::new(api_key.clone());
            if let Some(url) = api_base_url {
                gw.api_base_url = url.clone();
            }
            gw.country_code = country_code.clone();
            gw.proximity = *proximity;
            gw.timeout = *request_timeout;
            Some(gw)
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            None
        }
    }
}
