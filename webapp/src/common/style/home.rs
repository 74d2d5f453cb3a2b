pub const HOME_STYLES: &str = r#"
/* Storefront Page Styles */

/* Header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  padding: var(--header-padding) 0;
  background-color: transparent;
  backdrop-filter: none;
  box-shadow: none;
  transition: all var(--transition-normal);
}

.site-header.scrolled {
  background-color: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(10px);
  box-shadow: var(--shadow-header);
}

.header-bar {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.brand {
  display: flex;
  align-items: center;
  gap: 10px;
  text-decoration: none;
}

.brand-mark {
  width: 40px;
  height: 40px;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--carolina-blue);
  border-radius: var(--radius-sm);
  transform: rotate(45deg);
  box-shadow: 0 4px 10px rgba(123, 175, 212, 0.5);
}

.brand-mark span {
  transform: rotate(-45deg);
  color: var(--white);
  font-weight: bold;
  font-size: 1.2rem;
}

.brand-words {
  display: flex;
  flex-direction: column;
  margin-left: 12px;
}

.brand-words span {
  font-size: 1.25rem;
  line-height: 1;
}

.brand-primary {
  font-weight: 800;
  color: var(--navy);
  letter-spacing: -0.02em;
}

.brand-secondary {
  font-weight: 300;
  color: var(--carolina-blue);
  letter-spacing: 0.15em;
}

.inline-nav {
  display: flex;
  gap: 32px;
  align-items: center;
}

.inline-nav a {
  text-decoration: none;
  color: var(--navy);
  font-weight: 500;
  font-size: 0.95rem;
}

.drawer {
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  display: flex;
  flex-direction: column;
  gap: 16px;
  padding: 20px;
  background-color: var(--white);
  box-shadow: var(--shadow-drawer);
}

.drawer a {
  text-decoration: none;
  color: var(--navy);
  font-weight: 600;
  font-size: 1.1rem;
  text-align: center;
}

/* Hero */
.hero {
  position: relative;
  min-height: 90vh;
  display: flex;
  align-items: center;
  padding-top: 80px;
}

.hero-pattern {
  position: absolute;
  inset: 0;
  opacity: 0.15;
  z-index: -1;
}

.hero-glow {
  position: absolute;
  top: 20%;
  right: -10%;
  width: 600px;
  height: 600px;
  background: radial-gradient(circle, var(--carolina-blue) 0%, transparent 70%);
  opacity: 0.2;
  filter: blur(60px);
  z-index: -1;
}

.hero-content {
  max-width: 600px;
}

.hero-badge {
  display: inline-block;
  padding: 6px 12px;
  margin-bottom: 24px;
  border-radius: 50px;
  border: 1px solid rgba(19, 41, 75, 0.1);
  background-color: rgba(19, 41, 75, 0.1);
  color: var(--navy);
  font-size: 0.875rem;
  font-weight: 600;
}

.hero-title {
  font-size: clamp(2.5rem, 5vw, 4.5rem);
  font-weight: 800;
  color: var(--navy);
  line-height: 1.1;
  margin-bottom: 24px;
}

.hero-title .accent {
  color: var(--carolina-blue);
}

.hero-subtitle {
  max-width: 480px;
  margin-bottom: 40px;
  font-size: 1.25rem;
  line-height: 1.6;
  color: var(--slate);
}

.hero-actions {
  display: flex;
  gap: 16px;
  flex-wrap: wrap;
}

/* Features */
.features {
  background-color: var(--white);
}

.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 40px;
}

.feature-card {
  padding: 32px;
  border-radius: var(--radius-xl);
  background-color: var(--off-white);
  border: 1px solid var(--light-gray);
  transition: transform var(--transition-fast);
}

.feature-card:hover {
  transform: translateY(-5px);
}

.feature-icon {
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 20px;
  border-radius: var(--radius-lg);
  background-color: rgba(123, 175, 212, 0.15);
}

.feature-title {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--navy);
  margin-bottom: 12px;
}

.feature-desc {
  color: var(--muted);
  line-height: 1.6;
}

/* Shop */
.shop {
  background-color: var(--off-white);
}

.section-heading {
  text-align: center;
  margin-bottom: 60px;
}

.section-heading h2 {
  font-size: 2.5rem;
  font-weight: 800;
  color: var(--navy);
  margin-bottom: 16px;
}

.section-heading p {
  max-width: 600px;
  margin: 0 auto;
  color: var(--muted);
}

.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 32px;
}

.product-card {
  position: relative;
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: var(--radius-lg);
  border: 1px solid var(--light-gray);
  background-color: var(--white);
  box-shadow: var(--shadow-card);
  cursor: pointer;
  transition: all var(--transition-normal);
}

.product-image {
  position: relative;
  height: 280px;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background-color: #F3F4F6;
}

.product-pattern {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  background-image: repeating-linear-gradient(45deg, var(--navy) 0, var(--navy) 1px, transparent 0, transparent 50%);
  background-size: 10px 10px;
}

.card-mock {
  width: 160px;
  height: 220px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 10px;
  border-radius: 8px;
  border: 4px solid var(--white);
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
  transform: rotate(-5deg);
}

.card-mock-window {
  width: 100%;
  height: 50%;
  background: rgba(255, 255, 255, 0.3);
  border-radius: 4px 4px 0 0;
}

.card-mock-seal {
  width: 60%;
  height: 40%;
  margin-top: -20px;
  border-radius: 50%;
  border: 2px solid var(--white);
  background: var(--navy);
}

.product-badge {
  position: absolute;
  top: 12px;
  left: 12px;
  padding: 4px 8px;
  border-radius: var(--radius-sm);
  background-color: var(--navy);
  color: var(--white);
  font-size: 0.75rem;
  font-weight: bold;
}

.product-info {
  padding: 20px;
}

.product-title {
  font-size: 1.1rem;
  font-weight: 700;
  color: var(--navy);
  margin-bottom: 8px;
}

.product-meta {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.product-price {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text);
}

.product-cta {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--carolina-blue);
}

.shop-more {
  text-align: center;
  margin-top: 60px;
}

/* About */
.about {
  background-color: var(--navy);
  color: var(--white);
}

.about-inner {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.about-monogram {
  width: 80px;
  height: 80px;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 32px;
  border-radius: 50%;
  background-color: var(--white);
}

.about-monogram span {
  font-size: 2rem;
  font-weight: bold;
  color: var(--navy);
}

.about h2 {
  font-size: clamp(2rem, 4vw, 3rem);
  font-weight: 800;
  margin-bottom: 24px;
}

.about p {
  max-width: 700px;
  margin-bottom: 40px;
  font-size: 1.2rem;
  line-height: 1.8;
  color: #E0E7FF;
}

.about-rule {
  width: 100px;
  height: 4px;
  border-radius: 2px;
  background-color: var(--carolina-blue);
}

/* Newsletter */
.newsletter {
  padding: 100px 0;
  background-color: var(--carolina-blue);
}

.newsletter-card {
  max-width: 800px;
  margin: 0 auto;
  padding: 40px;
  text-align: center;
  border-radius: 24px;
  background-color: var(--white);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
}

.newsletter-card h3 {
  font-size: 2rem;
  font-weight: 800;
  color: var(--navy);
  margin-bottom: 16px;
}

.newsletter-card p {
  color: var(--muted);
  margin-bottom: 32px;
}

.newsletter-form {
  display: flex;
  gap: 12px;
  flex-wrap: wrap;
  justify-content: center;
}

.newsletter-form input {
  width: 100%;
  max-width: 350px;
  padding: 16px 24px;
  border-radius: 8px;
  border: 2px solid var(--light-gray);
  font-size: 1rem;
  outline: none;
}

/* Footer */
.site-footer {
  padding: 60px 0 20px;
  background-color: var(--ink);
  color: var(--footer-text);
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 40px;
  margin-bottom: 60px;
}

.footer-grid h4 {
  color: var(--white);
  font-size: 1rem;
  font-weight: 600;
  margin-bottom: 20px;
}

.footer-grid h4.footer-brand {
  font-size: 1.2rem;
  font-weight: 700;
}

.footer-grid p {
  font-size: 0.9rem;
  line-height: 1.6;
}

.footer-grid ul {
  list-style: none;
  padding: 0;
  margin: 0;
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.footer-grid a {
  text-decoration: none;
  color: inherit;
}

.footer-bottom {
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 20px;
  padding-top: 20px;
  border-top: 1px solid #1E293B;
}

.footer-bottom p {
  font-size: 0.875rem;
}

.footer-social {
  display: flex;
  gap: 20px;
}

.footer-social span {
  width: 20px;
  height: 20px;
  border-radius: var(--radius-sm);
  background-color: #334155;
}
"#;
