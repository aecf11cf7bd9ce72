//! The site's message dictionary.
//!
//! Every key carries exactly one string per supported language. Strings that
//! embed a value use a `{name}` placeholder filled by
//! [`Translator::fill`](super::Translator::fill).

use super::Translation;

macro_rules! dictionary {
    ($($key:literal => [$fr:literal, $en:literal, $zh:literal $(,)?]),* $(,)?) => {
        &[$(($key, Translation { fr: $fr, en: $en, zh: $zh })),*]
    };
}

pub(super) static ENTRIES: &[(&str, Translation)] = dictionary! {
    // Navigation
    "nav.home" => ["Accueil", "Home", "首页"],
    "nav.about" => ["À Propos", "About", "关于我们"],
    "nav.products" => ["Produits", "Products", "产品"],
    "nav.contact" => ["Contact", "Contact", "联系我们"],
    "nav.checkout" => ["Panier", "Cart", "购物车"],
    "lang.switch" => ["Changer de langue", "Change language", "切换语言"],

    // Hero
    "hero.title" => [
        "Fabrication de gants techniques pour l'industrie",
        "Technical Gloves Manufacturing for Industry",
        "工业技术手套制造",
    ],
    "hero.subtitle" => [
        "Protection et performance au service des professionnels. Gants polyester, coton et revêtement nitrile pour tous vos besoins industriels.",
        "Protection and performance for professionals. Polyester, cotton and nitrile coated gloves for all your industrial needs.",
        "为专业人士提供保护和性能。聚酯、棉和丁腈涂层手套，满足您所有的工业需求。",
    ],
    "hero.cta.products" => ["Découvrir nos produits", "Discover our products", "发现我们的产品"],
    "hero.cta.contact" => ["Nous contacter", "Contact us", "联系我们"],

    // Video section
    "video.title" => ["Qualité & Excellence", "Quality & Excellence", "质量与卓越"],
    "video.description" => [
        "Notre processus de fabrication garantit des gants de haute qualité, conçus pour résister aux environnements industriels les plus exigeants. Chaque paire est fabriquée avec des matériaux premium : polyester, nitrile et coton.",
        "Our manufacturing process ensures high-quality gloves, designed to withstand the most demanding industrial environments. Each pair is made with premium materials: polyester, nitrile and cotton.",
        "我们的制造工艺确保高品质手套，专为应对最苛刻的工业环境而设计。每双手套均采用优质材料制成：聚酯、丁腈和棉。",
    ],

    // Image section
    "image.title" => ["Polyvalence & Confort", "Versatility & Comfort", "多功能与舒适"],
    "image.description" => [
        "Nos gants s'adaptent à tous les secteurs : agriculture, industrie, manutention et bien plus. Disponibles en tailles 8, 9 et 10, et en plusieurs couleurs : blanc, noir, bleu, rouge, orange, gris et vert.",
        "Our gloves adapt to all sectors: agriculture, industry, handling and more. Available in sizes 8, 9 and 10, and in multiple colors: white, black, blue, red, orange, gray and green.",
        "我们的手套适用于所有行业：农业、工业、搬运等。提供8、9、10号尺码，多种颜色可选：白色、黑色、蓝色、红色、橙色、灰色和绿色。",
    ],

    // Category section
    "category.title" => ["Notre Spécialité", "Our Specialty", "我们的专长"],
    "category.subtitle" => [
        "Spécialisés dans la fabrication de gants et textiles techniques pour l'industrie",
        "Specialized in manufacturing technical gloves and textiles for industry",
        "专业生产工业用技术手套和纺织品",
    ],
    "category.description" => [
        "Nous fabriquons une gamme complète de gants techniques : Fil de coton, U3, revêtement nitrile, coton pur et anti-coupure avec revêtement nitrile. Chaque produit est conçu pour offrir protection et durabilité dans les environnements de travail exigeants.",
        "We manufacture a complete range of technical gloves: Cotton thread, U3, nitrile coating, pure cotton and cut-resistant with nitrile coating. Each product is designed to provide protection and durability in demanding work environments.",
        "我们生产全系列技术手套：棉线、U3、丁腈涂层、纯棉和带丁腈涂层的防割手套。每款产品均旨在为苛刻的工作环境提供保护和耐用性。",
    ],
    "category.cta" => ["Voir tous nos produits", "View all products", "查看所有产品"],

    // Why choose us
    "why.title" => ["Pourquoi Witherstex ?", "Why Witherstex?", "为什么选择Witherstex？"],
    "why.subtitle" => [
        "L'excellence au service de votre sécurité",
        "Excellence in service of your safety",
        "卓越服务，保障您的安全",
    ],
    "why.quality.title" => ["Qualité Certifiée", "Certified Quality", "认证质量"],
    "why.quality.desc" => [
        "Tous nos produits respectent les normes de qualité les plus strictes pour garantir votre protection.",
        "All our products meet the strictest quality standards to ensure your protection.",
        "我们所有产品均符合最严格的质量标准，确保您的安全。",
    ],
    "why.expertise.title" => ["Expertise Technique", "Technical Expertise", "技术专长"],
    "why.expertise.desc" => [
        "Une équipe d'experts dédiée à la conception de solutions de protection adaptées à vos besoins.",
        "A team of experts dedicated to designing protection solutions tailored to your needs.",
        "专业团队致力于设计满足您需求的防护解决方案。",
    ],
    "why.custom.title" => ["Sur Mesure B2B", "Custom B2B Solutions", "B2B定制方案"],
    "why.custom.desc" => [
        "Solutions personnalisées pour les besoins spécifiques de votre industrie.",
        "Customized solutions for the specific needs of your industry.",
        "为您行业的特定需求提供定制解决方案。",
    ],
    "why.cta" => ["En savoir plus", "Learn more", "了解更多"],

    // Call to action
    "cta.title" => ["Besoin d'une solution sur mesure ?", "Need a custom solution?", "需要定制解决方案？"],
    "cta.description" => [
        "Notre équipe est à votre disposition pour répondre à vos besoins spécifiques.",
        "Our team is at your disposal to meet your specific needs.",
        "我们的团队随时为您提供服务，满足您的特定需求。",
    ],
    "cta.button" => ["Contactez-nous", "Contact us", "联系我们"],

    // Home
    "home.featured" => ["Produits phares", "Featured products", "精选产品"],

    // Footer
    "footer.description" => [
        "Fabricant de gants techniques de haute qualité pour les professionnels de l'industrie.",
        "Manufacturer of high-quality technical gloves for industry professionals.",
        "为工业专业人士生产高品质技术手套。",
    ],
    "footer.nav" => ["Navigation", "Navigation", "导航"],
    "footer.products.title" => ["Produits", "Products", "产品"],
    "footer.products.cotton" => ["Fil de Coton", "Cotton Thread", "棉线"],
    "footer.products.nitrile" => ["Revêtement Nitrile", "Nitrile Coating", "丁腈涂层"],
    "footer.products.cut" => ["Anti-coupure", "Cut Resistant", "防割"],
    "footer.products.u3" => ["Gants U3", "U3 Gloves", "U3手套"],
    "footer.products.cotton2" => ["Gants Coton", "Cotton Gloves", "棉手套"],
    "footer.contact" => ["Contact", "Contact", "联系方式"],
    "footer.rights" => ["Tous droits réservés.", "All rights reserved.", "版权所有。"],
    "footer.legal" => ["Mentions légales", "Legal", "法律声明"],
    "footer.terms" => ["CGV", "Terms", "条款"],
    "footer.privacy" => ["Confidentialité", "Privacy", "隐私"],

    // Catalogue
    "catalogue.title" => ["Notre Catalogue", "Our Catalogue", "我们的目录"],
    "catalogue.subtitle" => [
        "Découvrez notre gamme complète de gants techniques pour tous les environnements professionnels",
        "Discover our complete range of technical gloves for all professional environments",
        "发现我们全系列技术手套，适用于所有专业环境",
    ],
    "catalogue.results" => ["produit", "product", "产品"],
    "catalogue.results.plural" => ["produits", "products", "产品"],
    "catalogue.found" => ["trouvé", "found", "找到"],
    "catalogue.found.plural" => ["trouvés", "found", "找到"],
    "catalogue.empty" => ["Aucun produit disponible", "No products available", "暂无产品"],
    "catalogue.error" => [
        "Impossible de charger les produits. Veuillez réessayer plus tard.",
        "Error loading products. Please try again later.",
        "加载产品失败，请稍后再试。",
    ],

    // Product card and detail page
    "product.pcsPerColis" => ["pcs/colis", "pcs/package", "件/包"],
    "product.piecesPerPackage" => [
        "Chaque colis contient {count} pièces",
        "Each package contains {count} pieces",
        "每包含 {count} 件",
    ],
    "product.minOrder" => [
        "Quantité minimale de commande : {count} colis",
        "Minimum order quantity: {count} packages",
        "最低订购量：{count} 包",
    ],
    "product.minPieces" => [
        "Soit un minimum de {count} pièces par commande",
        "That is a minimum of {count} pieces per order",
        "即每单最少 {count} 件",
    ],
    "product.orderWhatsapp" => ["Commander via WhatsApp", "Order via WhatsApp", "通过WhatsApp订购"],
    "product.requestQuote" => ["Demander un devis", "Request a quote", "索取报价"],
    "product.specs" => ["Spécifications Techniques", "Technical Specifications", "技术规格"],
    "product.addToCart" => ["Ajouter au panier", "Add to cart", "加入购物车"],
    "product.quantity" => ["Quantité (colis)", "Quantity (packages)", "数量（包）"],
    "product.back" => ["Retour", "Back", "返回"],
    "product.notFound" => ["Produit non trouvé", "Product not found", "未找到产品"],
    "product.backToCatalogue" => ["Retour au catalogue", "Back to catalogue", "返回目录"],
    "product.contextTitle" => [
        "Conçu pour les professionnels",
        "Designed for professionals",
        "专为专业人士设计",
    ],
    "product.contextText" => [
        "Nos gants sont testés dans les conditions les plus exigeantes pour garantir votre sécurité.",
        "Our gloves are tested in the most demanding conditions to guarantee your safety.",
        "我们的手套在最苛刻的条件下经过测试，以确保您的安全。",
    ],
    "product.contextAlt" => [
        "Gant en utilisation dans un environnement industriel",
        "Glove in use in an industrial environment",
        "在工业环境中使用的手套",
    ],

    // Technical specification labels
    "spec.material" => ["Matériau", "Material", "材料"],
    "spec.coating" => ["Revêtement", "Coating", "涂层"],
    "spec.sizes" => ["Tailles", "Sizes", "尺码"],
    "spec.thickness" => ["Épaisseur", "Thickness", "厚度"],
    "spec.length" => ["Longueur", "Length", "长度"],
    "spec.certification" => ["Certification", "Certification", "认证"],
    "spec.resistance" => ["Résistance", "Resistance", "防护性能"],

    // Cart
    "cart.title" => ["Votre panier", "Your cart", "您的购物车"],
    "cart.empty.title" => ["Votre panier est vide", "Your cart is empty", "您的购物车是空的"],
    "cart.empty.cta" => ["Voir nos produits", "View our products", "查看我们的产品"],
    "cart.update" => ["Mettre à jour", "Update", "更新"],
    "cart.remove" => ["Retirer", "Remove", "移除"],
    "cart.added" => ["Produit ajouté au panier", "Product added to cart", "产品已加入购物车"],

    // Checkout
    "checkout.title" => ["Finaliser votre commande", "Complete your order", "完成您的订单"],
    "checkout.details" => ["Vos informations", "Your details", "您的信息"],
    "checkout.firstName" => ["Prénom", "First name", "名"],
    "checkout.lastName" => ["Nom", "Last name", "姓"],
    "checkout.email" => ["Email", "Email", "电子邮箱"],
    "checkout.phone" => ["Téléphone", "Phone", "电话"],
    "checkout.company" => ["Entreprise", "Company", "公司"],
    "checkout.address" => ["Adresse", "Address", "地址"],
    "checkout.postalCode" => ["Code postal", "Postal code", "邮政编码"],
    "checkout.city" => ["Ville", "City", "城市"],
    "checkout.country" => ["Pays", "Country", "国家"],
    "checkout.submit" => ["Commander via WhatsApp", "Order via WhatsApp", "通过WhatsApp下单"],
    "checkout.redirectNote" => [
        "Vous serez redirigé vers WhatsApp pour finaliser votre commande",
        "You will be redirected to WhatsApp to complete your order",
        "您将被重定向到WhatsApp完成订单",
    ],
    "checkout.summary" => ["Récapitulatif", "Summary", "订单摘要"],
    "checkout.qty" => ["Qté", "Qty", "数量"],
    "checkout.packages" => ["colis", "packages", "包"],
    "checkout.pieces" => ["pièces", "pieces", "件"],
    "checkout.priceNote" => [
        "Le prix sera confirmé par notre équipe via WhatsApp",
        "The price will be confirmed by our team via WhatsApp",
        "价格将由我们的团队通过WhatsApp确认",
    ],
    "checkout.redirecting" => ["Redirection vers WhatsApp...", "Redirecting to WhatsApp...", "正在跳转到WhatsApp..."],
    "checkout.handoff.title" => ["Votre commande est prête", "Your order is ready", "您的订单已准备好"],
    "checkout.handoff.description" => [
        "WhatsApp s'ouvre dans un nouvel onglet avec votre commande. Si rien ne s'ouvre, utilisez le bouton ci-dessous.",
        "WhatsApp opens in a new tab with your order. If nothing opens, use the button below.",
        "WhatsApp将在新标签页中打开您的订单。如果没有打开，请使用下面的按钮。",
    ],
    "checkout.handoff.open" => ["Ouvrir WhatsApp", "Open WhatsApp", "打开WhatsApp"],
    "checkout.errorFirstName" => ["Prénom requis", "First name required", "请填写名字"],
    "checkout.errorLastName" => ["Nom requis", "Last name required", "请填写姓氏"],
    "checkout.errorEmail" => ["Email invalide", "Invalid email", "邮箱格式无效"],
    "checkout.errorPhone" => ["Téléphone invalide", "Invalid phone number", "电话号码无效"],
    "checkout.errorAddress" => ["Adresse requise", "Address required", "请填写地址"],
    "checkout.errorCity" => ["Ville requise", "City required", "请填写城市"],
    "checkout.errorPostalCode" => ["Code postal requis", "Postal code required", "请填写邮政编码"],
    "checkout.errorCountry" => ["Pays requis", "Country required", "请填写国家"],

    // Outbound WhatsApp messages
    "message.order.title" => [
        "🧤 *Nouvelle commande Witherstex*",
        "🧤 *New Witherstex order*",
        "🧤 *Witherstex 新订单*",
    ],
    "message.order.customer" => ["*Client:*", "*Customer:*", "*客户：*"],
    "message.order.company" => ["Entreprise", "Company", "公司"],
    "message.order.email" => ["Email", "Email", "邮箱"],
    "message.order.phone" => ["Tél", "Phone", "电话"],
    "message.order.address" => ["*Adresse de livraison:*", "*Delivery address:*", "*收货地址：*"],
    "message.order.items" => ["*Articles commandés:*", "*Ordered items:*", "*订购商品：*"],
    "message.order.packages" => ["colis", "packages", "包"],
    "message.order.pieces" => ["pièces", "pieces", "件"],
    "message.order.closing" => [
        "Merci de confirmer la disponibilité, le prix et le délai de livraison.",
        "Please confirm availability, price and delivery time.",
        "请确认库存、价格和交货时间。",
    ],
    "message.inquiry" => [
        "Bonjour, je suis intéressé par le produit \"{product}\". Pouvez-vous me donner plus d'informations ?",
        "Hello, I am interested in the product \"{product}\". Could you give me more information?",
        "您好，我对产品“{product}”感兴趣。能否提供更多信息？",
    ],

    // About
    "about.hero.title" => ["À Propos de Witherstex", "About Witherstex", "关于Witherstex"],
    "about.hero.subtitle" => [
        "Fabricant spécialisé de gants techniques et textiles pour l'industrie.",
        "Specialized manufacturer of technical gloves and textiles for industry.",
        "专业生产工业用技术手套和纺织品。",
    ],
    "about.story.title" => ["Notre Mission", "Our Mission", "我们的使命"],
    "about.story.p1" => [
        "Witherstex est une entreprise spécialisée dans la fabrication de gants techniques et textiles pour le secteur industriel. Basée à Casablanca, au Maroc, nous nous engageons à fournir des solutions de protection de haute qualité.",
        "Witherstex is a company specialized in manufacturing technical gloves and textiles for the industrial sector. Based in Casablanca, Morocco, we are committed to providing high-quality protection solutions.",
        "Witherstex是一家专业生产工业用技术手套和纺织品的公司。我们位于摩洛哥卡萨布兰卡，致力于提供高品质的防护解决方案。",
    ],
    "about.story.p2" => [
        "Notre gamme de produits comprend : fil de coton, gants U3, revêtement nitrile, gants en coton pur et gants anti-coupure avec revêtement nitrile. Chaque produit est conçu pour répondre aux exigences les plus strictes de l'industrie.",
        "Our product range includes: cotton thread, U3 gloves, nitrile coating, pure cotton gloves and cut-resistant gloves with nitrile coating. Each product is designed to meet the strictest industry requirements.",
        "我们的产品系列包括：棉线、U3手套、丁腈涂层、纯棉手套和带丁腈涂层的防割手套。每款产品均旨在满足最严格的行业要求。",
    ],
    "about.story.p3" => [
        "Disponibles en tailles 8, 9 et 10, nos gants sont fabriqués à partir de polyester et nitrile de qualité supérieure, offrant une protection optimale et un confort durable pour tous les environnements de travail.",
        "Available in sizes 8, 9 and 10, our gloves are made from premium polyester and nitrile, offering optimal protection and lasting comfort for all work environments.",
        "提供8、9、10号尺码，我们的手套采用优质聚酯和丁腈制成，为所有工作环境提供最佳保护和持久舒适。",
    ],
    "about.story.badge" => ["Qualité garantie", "Quality guaranteed", "质量保证"],
    "about.values.title" => ["Nos Valeurs", "Our Values", "我们的价值观"],
    "about.values.subtitle" => [
        "Des principes qui guident chaque décision et chaque produit",
        "Principles that guide every decision and every product",
        "指导每个决策和每个产品的原则",
    ],
    "about.value.quality.title" => ["Qualité", "Quality", "质量"],
    "about.value.quality.desc" => [
        "Nous ne faisons aucun compromis sur la qualité de nos matériaux et de notre fabrication.",
        "We make no compromises on the quality of our materials and manufacturing.",
        "我们对材料和制造质量绝不妥协。",
    ],
    "about.value.innovation.title" => ["Innovation", "Innovation", "创新"],
    "about.value.innovation.desc" => [
        "Recherche constante de nouvelles solutions pour améliorer la protection.",
        "Constant search for new solutions to improve protection.",
        "不断寻求新解决方案以提升防护效果。",
    ],
    "about.value.service.title" => ["Service", "Service", "服务"],
    "about.value.service.desc" => [
        "Accompagnement personnalisé pour chaque client professionnel.",
        "Personalized support for every professional client.",
        "为每位专业客户提供个性化支持。",
    ],
    "about.value.reliability.title" => ["Fiabilité", "Reliability", "可靠性"],
    "about.value.reliability.desc" => [
        "Des produits testés et approuvés pour les environnements les plus exigeants.",
        "Products tested and approved for the most demanding environments.",
        "产品经过测试和认证，适用于最苛刻的环境。",
    ],
    "about.stats.products" => ["Types de produits", "Product types", "产品类型"],
    "about.stats.sizes" => ["Tailles disponibles", "Available sizes", "可用尺码"],
    "about.stats.colors" => ["Couleurs", "Colors", "颜色"],
    "about.stats.industry" => ["Usage industriel", "Industrial use", "工业用途"],
    "about.products.title" => ["Nos Produits", "Our Products", "我们的产品"],
    "about.products.cotton" => ["Fil de Coton", "Cotton Thread", "棉线"],
    "about.products.u3" => ["Gants U3", "U3 Gloves", "U3手套"],
    "about.products.nitrile" => ["Revêtement Nitrile", "Nitrile Coating", "丁腈涂层"],
    "about.products.pureCotton" => ["Coton Pur", "Pure Cotton", "纯棉"],
    "about.products.cutResistant" => ["Anti-coupure Nitrile", "Nitrile Cut-Resistant", "丁腈防割"],

    // Admin dashboard
    "admin.title" => ["Witherstex Admin", "Witherstex Admin", "Witherstex 管理"],
    "admin.logout" => ["Déconnexion", "Logout", "退出登录"],
    "admin.products" => ["Produits", "Products", "产品"],
    "admin.addProduct" => ["Ajouter un produit", "Add product", "添加产品"],
    "admin.editProduct" => ["Modifier le produit", "Edit product", "编辑产品"],
    "admin.newProduct" => ["Nouveau produit", "New product", "新产品"],
    "admin.backToList" => ["Retour à la liste", "Back to list", "返回列表"],
    "admin.productImage" => ["Image du produit", "Product image", "产品图片"],
    "admin.upload" => ["Télécharger", "Upload", "上传"],
    "admin.removeImage" => ["Retirer l'image", "Remove image", "移除图片"],
    "admin.imageFormats" => [
        "Formats acceptés: JPG, PNG, WebP. Max 5MB.",
        "Accepted formats: JPG, PNG, WebP. Max 5MB.",
        "支持格式：JPG、PNG、WebP。最大5MB。",
    ],
    "admin.name" => ["Nom", "Name", "名称"],
    "admin.slug" => ["Slug", "Slug", "链接别名"],
    "admin.slugPlaceholder" => ["auto-généré si vide", "auto-generated if empty", "留空则自动生成"],
    "admin.pricePerPackage" => ["Prix par colis (MAD)", "Price per package (MAD)", "每包价格 (MAD)"],
    "admin.pcsPerColis" => ["Pièces par colis", "Pieces per package", "每包件数"],
    "admin.minOrder" => ["Min: 10 colis", "Min: 10 packages", "最低：10包"],
    "admin.category" => ["Catégorie", "Category", "类别"],
    "admin.categoryIndustrial" => ["Industriel", "Industrial", "工业"],
    "admin.categoryChemical" => ["Chimique", "Chemical", "化学"],
    "admin.categoryHandling" => ["Manutention", "Handling", "搬运"],
    "admin.categoryThermal" => ["Thermique", "Thermal", "热防护"],
    "admin.categoryPrecision" => ["Précision", "Precision", "精密"],
    "admin.availableSizes" => ["Tailles disponibles", "Available sizes", "可用尺码"],
    "admin.sizesPlaceholder" => ["ex: 8, 9, 10", "e.g.: 8, 9, 10", "例如：8, 9, 10"],
    "admin.material" => ["Matière / Composition", "Material / Composition", "材料/成分"],
    "admin.materialPlaceholder" => [
        "ex: Polyester, Nitrile, Coton",
        "e.g.: Polyester, Nitrile, Cotton",
        "例如：聚酯、丁腈、棉",
    ],
    "admin.description" => ["Description", "Description", "描述"],
    "admin.orderNote" => [
        "Quantité minimale de commande: 10 colis (chaque colis contient 30 pièces)",
        "Minimum order quantity: 10 packages (each package contains 30 pieces)",
        "最低订购量：10包（每包30件）",
    ],
    "admin.save" => ["Enregistrer", "Save", "保存"],
    "admin.add" => ["Ajouter", "Add", "添加"],
    "admin.saving" => ["Enregistrement...", "Saving...", "保存中..."],
    "admin.cancel" => ["Annuler", "Cancel", "取消"],
    "admin.image" => ["Image", "Image", "图片"],
    "admin.price" => ["Prix", "Price", "价格"],
    "admin.actions" => ["Actions", "Actions", "操作"],
    "admin.edit" => ["Modifier", "Edit", "编辑"],
    "admin.delete" => ["Supprimer", "Delete", "删除"],
    "admin.deleteConfirm" => [
        "Êtes-vous sûr de vouloir supprimer ce produit ?",
        "Are you sure you want to delete this product?",
        "确定要删除此产品吗？",
    ],
    "admin.noProducts" => ["Aucun produit pour le moment", "No products yet", "暂无产品"],

    // Admin authentication
    "admin.auth.title" => ["Administration", "Administration", "管理系统"],
    "admin.auth.subtitle" => [
        "Witherstex - Espace Réservé",
        "Witherstex - Restricted Area",
        "Witherstex - 授权区域",
    ],
    "admin.auth.email" => ["Email", "Email", "电子邮箱"],
    "admin.auth.password" => ["Mot de passe", "Password", "密码"],
    "admin.auth.login" => ["Connexion", "Login", "登录"],
    "admin.auth.signup" => ["Créer un compte", "Create account", "创建账户"],
    "admin.auth.hasAccount" => [
        "Déjà un compte ? Connectez-vous",
        "Already have an account? Log in",
        "已有账户？登录",
    ],
    "admin.auth.noAccount" => [
        "Pas de compte ? Inscrivez-vous",
        "No account? Sign up",
        "没有账户？注册",
    ],
    "admin.auth.accessDenied" => ["Accès refusé", "Access denied", "访问被拒绝"],
    "admin.auth.noPermission" => [
        "Votre compte n'a pas les droits d'administration.",
        "Your account does not have admin privileges.",
        "您的账户没有管理员权限。",
    ],
    "admin.auth.loggedAs" => ["Connecté en tant que:", "Logged in as:", "当前登录："],
    "admin.auth.passwordTooShort" => [
        "Le mot de passe doit contenir au moins 6 caractères",
        "Password must be at least 6 characters",
        "密码至少需要6个字符",
    ],

    // Contact
    "contact.title" => ["Contactez-nous", "Contact Us", "联系我们"],
    "contact.subtitle" => [
        "Notre équipe est à votre disposition pour répondre à toutes vos questions et vous accompagner dans vos projets.",
        "Our team is at your disposal to answer all your questions and support you in your projects.",
        "我们的团队随时为您解答所有问题并支持您的项目。",
    ],
    "contact.form.title" => ["Envoyez-nous un message", "Send us a message", "给我们留言"],
    "contact.form.name" => ["Nom complet", "Full name", "姓名"],
    "contact.form.namePlaceholder" => ["Jean Dupont", "John Doe", "张三"],
    "contact.form.email" => ["Email", "Email", "电子邮箱"],
    "contact.form.emailPlaceholder" => ["jean@entreprise.fr", "john@company.com", "zhang@company.com"],
    "contact.form.company" => ["Entreprise", "Company", "公司"],
    "contact.form.companyPlaceholder" => ["Votre entreprise", "Your company", "您的公司"],
    "contact.form.phone" => ["Téléphone", "Phone", "电话"],
    "contact.form.phonePlaceholder" => ["01 23 45 67 89", "+1 234 567 890", "123 4567 8901"],
    "contact.form.subject" => ["Sujet", "Subject", "主题"],
    "contact.form.subjectGeneral" => ["Renseignement général", "General inquiry", "一般咨询"],
    "contact.form.subjectQuote" => ["Demande de devis", "Quote request", "报价请求"],
    "contact.form.subjectOrder" => ["Suivi de commande", "Order tracking", "订单跟踪"],
    "contact.form.subjectTechnical" => ["Question technique", "Technical question", "技术问题"],
    "contact.form.subjectPartnership" => ["Partenariat", "Partnership", "合作伙伴"],
    "contact.form.message" => ["Message", "Message", "留言"],
    "contact.form.messagePlaceholder" => ["Décrivez votre demande...", "Describe your request...", "请描述您的需求..."],
    "contact.form.submit" => ["Envoyer le message", "Send message", "发送消息"],
    "contact.form.submitting" => ["Envoi en cours...", "Sending...", "发送中..."],
    "contact.form.success" => ["Message envoyé avec succès !", "Message sent successfully!", "消息发送成功！"],
    "contact.form.errorName" => ["Nom requis", "Name required", "请填写姓名"],
    "contact.form.errorEmail" => ["Email invalide", "Invalid email", "邮箱格式无效"],
    "contact.form.errorSubject" => ["Sujet requis", "Subject required", "请选择主题"],
    "contact.form.errorMessage" => ["Message trop court", "Message too short", "留言内容太短"],
    "contact.info.title" => ["Informations de contact", "Contact Information", "联系信息"],
    "contact.info.address" => ["Adresse", "Address", "地址"],
    "contact.info.phone" => ["Téléphone", "Phone", "电话"],
    "contact.info.email" => ["Email", "Email", "电子邮箱"],
    "contact.info.hours" => ["Horaires", "Hours", "营业时间"],
    "contact.info.hoursValue" => [
        "Lun-Ven: 8h30 - 17h30",
        "Mon-Fri: 8:30 AM - 5:30 PM",
        "周一至周五：8:30 - 17:30",
    ],
    "contact.quote.title" => ["Besoin d'un devis rapide ?", "Need a quick quote?", "需要快速报价？"],
    "contact.quote.description" => [
        "Pour les commandes B2B de plus de 100 unités, contactez directement notre service commercial.",
        "For B2B orders of more than 100 units, contact our sales team directly.",
        "如需100件以上的B2B订单，请直接联系我们的销售团队。",
    ],
    "contact.quote.cta" => ["Appeler maintenant", "Call now", "立即拨打"],

    // Not found
    "notFound.title" => ["Page introuvable", "Page not found", "页面未找到"],
    "notFound.description" => [
        "La page que vous recherchez n'existe pas ou a été déplacée.",
        "The page you are looking for does not exist or has been moved.",
        "您要查找的页面不存在或已被移动。",
    ],
    "notFound.back" => ["Retour à l'accueil", "Back to home", "返回首页"],

    // Notifications
    "toast.accountCreated" => [
        "Compte créé! Vérifiez votre email pour confirmer.",
        "Account created! Check your email to confirm.",
        "账户已创建！请检查邮箱进行确认。",
    ],
    "toast.loginSuccess" => ["Connexion réussie", "Login successful", "登录成功"],
    "toast.logoutSuccess" => ["Déconnexion réussie", "Logout successful", "退出成功"],
    "toast.imageUploaded" => ["Image téléchargée avec succès", "Image uploaded successfully", "图片上传成功"],
    "toast.fillRequired" => [
        "Veuillez remplir tous les champs requis",
        "Please fill in all required fields",
        "请填写所有必填字段",
    ],
    "toast.selectImage" => ["Veuillez sélectionner une image", "Please select an image", "请选择图片"],
    "toast.imageTooLarge" => ["L'image ne doit pas dépasser 5MB", "Image must not exceed 5MB", "图片不能超过5MB"],
    "toast.uploadError" => [
        "Erreur lors du téléchargement de l'image",
        "Error uploading image",
        "图片上传失败",
    ],
    "toast.error" => ["Une erreur est survenue", "An error occurred", "发生错误"],
    "toast.emailUsed" => [
        "Cet email est déjà utilisé. Essayez de vous connecter.",
        "This email is already in use. Try logging in.",
        "此邮箱已被使用，请尝试登录。",
    ],
    "toast.invalidCredentials" => [
        "Email ou mot de passe incorrect.",
        "Invalid email or password.",
        "邮箱或密码错误。",
    ],
    "toast.productCreated" => ["Produit ajouté avec succès", "Product added successfully", "产品添加成功"],
    "toast.productCreateError" => [
        "Erreur lors de l'ajout du produit",
        "Error adding product",
        "添加产品失败",
    ],
    "toast.productUpdated" => ["Produit mis à jour", "Product updated", "产品已更新"],
    "toast.productUpdateError" => ["Erreur lors de la mise à jour", "Error updating product", "更新产品失败"],
    "toast.productDeleted" => ["Produit supprimé", "Product deleted", "产品已删除"],
    "toast.productDeleteError" => ["Erreur lors de la suppression", "Error deleting product", "删除产品失败"],
};
