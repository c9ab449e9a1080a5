use super::Scale::{Large, Medium, Small};
use super::{Country, Highlight, Scale};

// Fill region ids match the lowercase codes used as element ids in the world map.
const fn filled(
    code: &'static str,
    name: &'static str,
    alternative_names: &'static [&'static str],
    latitude: f32,
    longitude: f32,
    scale: Scale,
) -> Country {
    Country {
        code,
        name,
        alternative_names,
        latitude,
        longitude,
        scale,
        highlight: Highlight::Fill(code),
    }
}

const fn dotted(
    code: &'static str,
    name: &'static str,
    alternative_names: &'static [&'static str],
    latitude: f32,
    longitude: f32,
) -> Country {
    Country {
        code,
        name,
        alternative_names,
        latitude,
        longitude,
        scale: Small,
        highlight: Highlight::Dot,
    }
}

const fn scattered(
    code: &'static str,
    name: &'static str,
    alternative_names: &'static [&'static str],
    latitude: f32,
    longitude: f32,
    dots: &'static [(f32, f32)],
) -> Country {
    Country {
        code,
        name,
        alternative_names,
        latitude,
        longitude,
        scale: Small,
        highlight: Highlight::SmallDots(dots),
    }
}

#[rustfmt::skip]
pub static COUNTRIES: &[Country] = &[
    filled("af", "Afghanistan", &[], 33.94, 67.71, Medium),
    filled("al", "Albania", &[], 41.15, 20.17, Small),
    filled("dz", "Algeria", &[], 28.03, 1.66, Large),
    dotted("ad", "Andorra", &[], 42.51, 1.52),
    filled("ao", "Angola", &[], -11.20, 17.87, Large),
    scattered("ag", "Antigua and Barbuda", &["Antigua"], 17.06, -61.80, &[(17.07, -61.80), (17.63, -61.79)]),
    filled("ar", "Argentina", &[], -38.42, -63.62, Large),
    filled("am", "Armenia", &[], 40.07, 45.04, Small),
    filled("au", "Australia", &[], -25.27, 133.78, Large),
    filled("at", "Austria", &[], 47.52, 14.55, Medium),
    filled("az", "Azerbaijan", &[], 40.14, 47.58, Medium),
    filled("bs", "Bahamas", &["The Bahamas"], 25.03, -77.40, Medium),
    dotted("bh", "Bahrain", &[], 26.07, 50.56),
    filled("bd", "Bangladesh", &[], 23.68, 90.36, Medium),
    dotted("bb", "Barbados", &[], 13.19, -59.54),
    filled("by", "Belarus", &["Byelorussia"], 53.71, 27.95, Medium),
    filled("be", "Belgium", &[], 50.50, 4.47, Small),
    filled("bz", "Belize", &[], 17.19, -88.50, Small),
    filled("bj", "Benin", &[], 9.31, 2.32, Medium),
    filled("bt", "Bhutan", &[], 27.51, 90.43, Small),
    filled("bo", "Bolivia", &[], -16.29, -63.59, Large),
    filled("ba", "Bosnia and Herzegovina", &["Bosnia", "Bosnia-Herzegovina"], 43.92, 17.68, Small),
    filled("bw", "Botswana", &[], -22.33, 24.68, Medium),
    filled("br", "Brazil", &["Brasil"], -14.24, -51.93, Large),
    filled("bn", "Brunei", &["Brunei Darussalam"], 4.54, 114.73, Small),
    filled("bg", "Bulgaria", &[], 42.73, 25.49, Medium),
    filled("bf", "Burkina Faso", &[], 12.24, -1.56, Medium),
    filled("bi", "Burundi", &[], -3.37, 29.92, Small),
    scattered("cv", "Cabo Verde", &["Cape Verde"], 16.00, -24.01, &[(16.89, -25.00), (15.10, -23.60), (16.10, -22.80)]),
    filled("kh", "Cambodia", &[], 12.57, 104.99, Medium),
    filled("cm", "Cameroon", &[], 7.37, 12.35, Medium),
    filled("ca", "Canada", &[], 56.13, -106.35, Large),
    filled("cf", "Central African Republic", &["CAR"], 6.61, 20.94, Medium),
    filled("td", "Chad", &[], 15.45, 18.73, Large),
    filled("cl", "Chile", &[], -35.68, -71.54, Medium),
    filled("cn", "China", &["People's Republic of China", "PRC"], 35.86, 104.20, Large),
    filled("co", "Colombia", &[], 4.57, -74.30, Large),
    scattered("km", "Comoros", &[], -11.88, 43.87, &[(-11.70, 43.30), (-12.20, 44.40), (-12.30, 43.70)]),
    filled("cg", "Congo", &["Republic of the Congo", "Congo-Brazzaville"], -0.23, 15.83, Medium),
    filled("cd", "Democratic Republic of the Congo", &["DRC", "DR Congo", "Congo-Kinshasa"], -4.04, 21.76, Large),
    filled("cr", "Costa Rica", &[], 9.75, -83.75, Small),
    filled("ci", "Côte d'Ivoire", &["Ivory Coast", "Cote d'Ivoire"], 7.54, -5.55, Medium),
    filled("hr", "Croatia", &[], 45.10, 15.20, Small),
    filled("cu", "Cuba", &[], 21.52, -77.78, Medium),
    filled("cy", "Cyprus", &[], 35.13, 33.43, Small),
    filled("cz", "Czechia", &["Czech Republic"], 49.82, 15.47, Medium),
    filled("dk", "Denmark", &[], 56.26, 9.50, Small),
    filled("dj", "Djibouti", &[], 11.83, 42.59, Small),
    dotted("dm", "Dominica", &[], 15.41, -61.37),
    filled("do", "Dominican Republic", &[], 18.74, -70.16, Small),
    filled("ec", "Ecuador", &[], -1.83, -78.18, Medium),
    filled("eg", "Egypt", &[], 26.82, 30.80, Large),
    filled("sv", "El Salvador", &[], 13.79, -88.90, Small),
    filled("gq", "Equatorial Guinea", &[], 1.65, 10.27, Small),
    filled("er", "Eritrea", &[], 15.18, 39.78, Medium),
    filled("ee", "Estonia", &[], 58.60, 25.01, Small),
    filled("sz", "Eswatini", &["Swaziland"], -26.52, 31.47, Small),
    filled("et", "Ethiopia", &[], 9.15, 40.49, Large),
    scattered("fj", "Fiji", &[], -17.71, 178.07, &[(-17.80, 177.90), (-16.60, 179.40)]),
    filled("fi", "Finland", &[], 61.92, 25.75, Medium),
    filled("fr", "France", &[], 46.23, 2.21, Medium),
    filled("ga", "Gabon", &[], -0.80, 11.61, Medium),
    filled("gm", "Gambia", &["The Gambia"], 13.44, -15.31, Small),
    filled("ge", "Georgia", &[], 42.32, 43.36, Small),
    filled("de", "Germany", &["Deutschland"], 51.17, 10.45, Medium),
    filled("gh", "Ghana", &[], 7.95, -1.02, Medium),
    filled("gr", "Greece", &[], 39.07, 21.82, Medium),
    dotted("gd", "Grenada", &[], 12.12, -61.68),
    filled("gt", "Guatemala", &[], 15.78, -90.23, Small),
    filled("gn", "Guinea", &[], 9.95, -9.70, Medium),
    filled("gw", "Guinea-Bissau", &["Guinea Bissau"], 11.80, -15.18, Small),
    filled("gy", "Guyana", &[], 4.86, -58.93, Medium),
    filled("ht", "Haiti", &[], 18.97, -72.29, Small),
    dotted("va", "Holy See", &["Vatican", "Vatican City"], 41.90, 12.45),
    filled("hn", "Honduras", &[], 15.20, -86.24, Small),
    filled("hu", "Hungary", &[], 47.16, 19.50, Medium),
    filled("is", "Iceland", &[], 64.96, -19.02, Medium),
    filled("in", "India", &[], 20.59, 78.96, Large),
    filled("id", "Indonesia", &[], -0.79, 113.92, Large),
    filled("ir", "Iran", &["Persia"], 32.43, 53.69, Large),
    filled("iq", "Iraq", &[], 33.22, 43.68, Medium),
    filled("ie", "Ireland", &["Eire"], 53.41, -8.24, Small),
    filled("il", "Israel", &[], 31.05, 34.85, Small),
    filled("it", "Italy", &[], 41.87, 12.57, Medium),
    filled("jm", "Jamaica", &[], 18.11, -77.30, Small),
    filled("jp", "Japan", &[], 36.20, 138.25, Medium),
    filled("jo", "Jordan", &[], 30.59, 36.24, Medium),
    filled("kz", "Kazakhstan", &[], 48.02, 66.92, Large),
    filled("ke", "Kenya", &[], -0.02, 37.91, Medium),
    scattered("ki", "Kiribati", &[], 1.87, -157.36, &[(1.87, -157.36), (-2.80, -171.70), (1.33, 172.98)]),
    filled("xk", "Kosovo", &[], 42.60, 20.90, Small),
    filled("kw", "Kuwait", &[], 29.31, 47.48, Small),
    filled("kg", "Kyrgyzstan", &["Kyrgyz Republic"], 41.20, 74.77, Medium),
    filled("la", "Laos", &["Lao PDR"], 19.86, 102.50, Medium),
    filled("lv", "Latvia", &[], 56.88, 24.60, Small),
    filled("lb", "Lebanon", &[], 33.85, 35.86, Small),
    filled("ls", "Lesotho", &[], -29.61, 28.23, Small),
    filled("lr", "Liberia", &[], 6.43, -9.43, Medium),
    filled("ly", "Libya", &[], 26.34, 17.23, Large),
    dotted("li", "Liechtenstein", &[], 47.17, 9.56),
    filled("lt", "Lithuania", &[], 55.17, 23.88, Small),
    dotted("lu", "Luxembourg", &[], 49.82, 6.13),
    filled("mg", "Madagascar", &[], -18.77, 46.87, Medium),
    filled("mw", "Malawi", &[], -13.25, 34.30, Medium),
    filled("my", "Malaysia", &[], 4.21, 101.98, Medium),
    scattered("mv", "Maldives", &[], 3.20, 73.22, &[(4.17, 73.51), (0.60, 73.10), (6.70, 73.00)]),
    filled("ml", "Mali", &[], 17.57, -4.00, Large),
    dotted("mt", "Malta", &[], 35.94, 14.38),
    scattered("mh", "Marshall Islands", &[], 7.13, 171.18, &[(7.10, 171.40), (9.10, 167.30), (11.50, 162.30)]),
    filled("mr", "Mauritania", &[], 21.01, -10.94, Large),
    scattered("mu", "Mauritius", &[], -20.35, 57.55, &[(-20.30, 57.60), (-19.70, 63.40)]),
    filled("mx", "Mexico", &[], 23.63, -102.55, Large),
    scattered("fm", "Micronesia", &["Federated States of Micronesia"], 7.43, 150.55, &[(6.90, 158.20), (7.40, 151.80), (9.50, 138.10), (5.30, 163.00)]),
    filled("md", "Moldova", &[], 47.41, 28.37, Small),
    dotted("mc", "Monaco", &[], 43.75, 7.41),
    filled("mn", "Mongolia", &[], 46.86, 103.85, Large),
    filled("me", "Montenegro", &[], 42.71, 19.37, Small),
    filled("ma", "Morocco", &[], 31.79, -7.09, Medium),
    filled("mz", "Mozambique", &[], -18.67, 35.53, Medium),
    filled("mm", "Myanmar", &["Burma"], 21.91, 95.96, Medium),
    filled("na", "Namibia", &[], -22.96, 18.49, Medium),
    dotted("nr", "Nauru", &[], -0.52, 166.93),
    filled("np", "Nepal", &[], 28.39, 84.12, Medium),
    filled("nl", "Netherlands", &["Holland", "The Netherlands"], 52.13, 5.29, Small),
    filled("nz", "New Zealand", &["Aotearoa"], -40.90, 174.89, Medium),
    filled("ni", "Nicaragua", &[], 12.87, -85.21, Small),
    filled("ne", "Niger", &[], 17.61, 8.08, Large),
    filled("ng", "Nigeria", &[], 9.08, 8.68, Medium),
    filled("kp", "North Korea", &["Democratic People's Republic of Korea", "DPRK"], 40.34, 127.51, Medium),
    filled("mk", "North Macedonia", &["Macedonia"], 41.61, 21.75, Small),
    filled("no", "Norway", &[], 60.47, 8.47, Medium),
    filled("om", "Oman", &[], 21.51, 55.92, Medium),
    filled("pk", "Pakistan", &[], 30.38, 69.35, Medium),
    scattered("pw", "Palau", &[], 7.51, 134.58, &[(7.50, 134.60), (7.00, 134.30)]),
    filled("ps", "Palestine", &["State of Palestine"], 31.95, 35.23, Small),
    filled("pa", "Panama", &[], 8.54, -80.78, Small),
    filled("pg", "Papua New Guinea", &["PNG"], -6.31, 143.96, Medium),
    filled("py", "Paraguay", &[], -23.44, -58.44, Medium),
    filled("pe", "Peru", &[], -9.19, -75.02, Large),
    filled("ph", "Philippines", &["The Philippines"], 12.88, 121.77, Medium),
    filled("pl", "Poland", &[], 51.92, 19.15, Medium),
    filled("pt", "Portugal", &[], 39.40, -8.22, Medium),
    filled("qa", "Qatar", &[], 25.35, 51.18, Small),
    filled("ro", "Romania", &[], 45.94, 24.97, Medium),
    filled("ru", "Russia", &["Russian Federation"], 61.52, 105.32, Large),
    filled("rw", "Rwanda", &[], -1.94, 29.87, Small),
    scattered("kn", "Saint Kitts and Nevis", &["St Kitts and Nevis", "St. Kitts and Nevis"], 17.36, -62.78, &[(17.30, -62.72), (17.15, -62.58)]),
    dotted("lc", "Saint Lucia", &["St Lucia", "St. Lucia"], 13.91, -60.98),
    scattered("vc", "Saint Vincent and the Grenadines", &["St Vincent and the Grenadines", "St. Vincent and the Grenadines"], 12.98, -61.29, &[(13.25, -61.20), (12.60, -61.40)]),
    scattered("ws", "Samoa", &[], -13.76, -172.10, &[(-13.60, -172.40), (-13.90, -171.70)]),
    dotted("sm", "San Marino", &[], 43.94, 12.46),
    scattered("st", "São Tomé and Príncipe", &["Sao Tome and Principe"], 0.19, 6.61, &[(0.25, 6.60), (1.60, 7.40)]),
    filled("sa", "Saudi Arabia", &[], 23.89, 45.08, Large),
    filled("sn", "Senegal", &[], 14.50, -14.45, Medium),
    filled("rs", "Serbia", &[], 44.02, 21.01, Medium),
    scattered("sc", "Seychelles", &[], -4.68, 55.49, &[(-4.68, 55.49), (-9.40, 46.30), (-7.10, 52.70)]),
    filled("sl", "Sierra Leone", &[], 8.46, -11.78, Small),
    dotted("sg", "Singapore", &[], 1.35, 103.82),
    filled("sk", "Slovakia", &[], 48.67, 19.70, Small),
    filled("si", "Slovenia", &[], 46.15, 14.99, Small),
    filled("sb", "Solomon Islands", &[], -9.65, 160.16, Small),
    filled("so", "Somalia", &[], 5.15, 46.20, Medium),
    filled("za", "South Africa", &[], -30.56, 22.94, Large),
    filled("kr", "South Korea", &["Republic of Korea", "Korea"], 35.91, 127.77, Medium),
    filled("ss", "South Sudan", &[], 6.88, 31.31, Medium),
    filled("es", "Spain", &["España"], 40.46, -3.75, Medium),
    filled("lk", "Sri Lanka", &["Ceylon"], 7.87, 80.77, Small),
    filled("sd", "Sudan", &[], 12.86, 30.22, Large),
    filled("sr", "Suriname", &["Surinam"], 3.92, -56.03, Medium),
    filled("se", "Sweden", &[], 60.13, 18.64, Medium),
    filled("ch", "Switzerland", &[], 46.82, 8.23, Small),
    filled("sy", "Syria", &[], 34.80, 39.00, Medium),
    filled("tw", "Taiwan", &[], 23.70, 120.96, Small),
    filled("tj", "Tajikistan", &[], 38.86, 71.28, Medium),
    filled("tz", "Tanzania", &[], -6.37, 34.89, Medium),
    filled("th", "Thailand", &[], 15.87, 100.99, Medium),
    filled("tl", "Timor-Leste", &["East Timor", "Timor Leste"], -8.87, 125.73, Small),
    filled("tg", "Togo", &[], 8.62, 0.82, Small),
    scattered("to", "Tonga", &[], -21.18, -175.20, &[(-21.18, -175.20), (-18.65, -173.98), (-15.95, -173.78)]),
    filled("tt", "Trinidad and Tobago", &["Trinidad"], 10.69, -61.22, Small),
    filled("tn", "Tunisia", &[], 33.89, 9.54, Medium),
    filled("tr", "Turkey", &["Türkiye", "Turkiye"], 38.96, 35.24, Medium),
    filled("tm", "Turkmenistan", &[], 38.97, 59.56, Medium),
    scattered("tv", "Tuvalu", &[], -7.11, 177.65, &[(-8.52, 179.20), (-5.68, 176.10), (-7.48, 178.68)]),
    filled("ug", "Uganda", &[], 1.37, 32.29, Medium),
    filled("ua", "Ukraine", &[], 48.38, 31.17, Medium),
    filled("ae", "United Arab Emirates", &["UAE", "Emirates"], 23.42, 53.85, Small),
    filled("gb", "United Kingdom", &["UK", "Great Britain", "Britain"], 55.38, -3.44, Medium),
    filled("us", "United States", &["USA", "US", "United States of America", "America"], 37.09, -95.71, Large),
    filled("uy", "Uruguay", &[], -32.52, -55.77, Medium),
    filled("uz", "Uzbekistan", &[], 41.38, 64.59, Medium),
    filled("vu", "Vanuatu", &[], -15.38, 166.96, Small),
    filled("ve", "Venezuela", &[], 6.42, -66.59, Medium),
    filled("vn", "Vietnam", &["Viet Nam"], 14.06, 108.28, Medium),
    filled("ye", "Yemen", &[], 15.55, 48.52, Medium),
    filled("zm", "Zambia", &[], -13.13, 27.85, Medium),
    filled("zw", "Zimbabwe", &[], -19.02, 29.15, Medium),
];
